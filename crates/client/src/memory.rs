//! In-memory package client for tests and local development

use std::collections::HashMap;

use async_trait::async_trait;

use pkgdash_errors::{PackageError, Result};
use pkgdash_types::{PackageDescriptor, PackageFilter, PackageId, ServiceDescriptor};

use crate::PackageClient;

/// Client backed by a fixed descriptor set instead of a daemon
///
/// Applies `PackageFilter` the way a real daemon would, so handler code
/// exercised against it sees the same semantics either way. Descriptors
/// are returned in insertion order; sorting is the lister's concern.
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    packages: Vec<PackageDescriptor>,
    services: HashMap<PackageId, Vec<ServiceDescriptor>>,
}

impl MemoryClient {
    /// Create an empty client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one package descriptor
    #[must_use]
    pub fn with_package(mut self, descriptor: PackageDescriptor) -> Self {
        self.packages.push(descriptor);
        self
    }

    /// Add many package descriptors
    #[must_use]
    pub fn with_packages(mut self, descriptors: impl IntoIterator<Item = PackageDescriptor>) -> Self {
        self.packages.extend(descriptors);
        self
    }

    /// Attach service metadata to a package
    #[must_use]
    pub fn with_services(mut self, id: PackageId, services: Vec<ServiceDescriptor>) -> Self {
        self.services.insert(id, services);
        self
    }
}

#[async_trait]
impl PackageClient for MemoryClient {
    async fn list_packages(&self, filter: &PackageFilter) -> Result<Vec<PackageDescriptor>> {
        Ok(self
            .packages
            .iter()
            .filter(|descriptor| filter.matches(descriptor))
            .cloned()
            .collect())
    }

    async fn get_package(&self, id: &PackageId) -> Result<PackageDescriptor> {
        self.packages
            .iter()
            .find(|descriptor| descriptor.id() == *id)
            .cloned()
            .ok_or_else(|| {
                PackageError::NotFound {
                    name: id.to_string(),
                }
                .into()
            })
    }

    async fn services(&self, id: &PackageId) -> Result<Vec<ServiceDescriptor>> {
        Ok(self.services.get(id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgdash_types::{PackageStatus, PackageType, ServicePort};

    fn descriptor(name: &str, package_type: PackageType, status: PackageStatus) -> PackageDescriptor {
        PackageDescriptor {
            name: name.to_string(),
            origin: "canonical".to_string(),
            version: "2.0".to_string(),
            package_type,
            description: format!("{name} package"),
            icon: String::new(),
            download_size: 100,
            installed_size: 1000,
            status,
        }
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let client = MemoryClient::new().with_packages([
            descriptor("editor", PackageType::App, PackageStatus::Installed),
            descriptor("pi-config", PackageType::Gadget, PackageStatus::Active),
            descriptor("webcam", PackageType::App, PackageStatus::NotInstalled),
        ]);

        let filter = PackageFilter {
            types: vec![PackageType::App],
            installed_only: true,
            ..PackageFilter::default()
        };
        let packages = client.list_packages(&filter).await.expect("list");
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "editor");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let client = MemoryClient::new()
            .with_package(descriptor("editor", PackageType::App, PackageStatus::Installed));

        let found = client
            .get_package(&"editor.canonical".parse().unwrap())
            .await
            .expect("get");
        assert_eq!(found.name, "editor");

        let err = client
            .get_package(&"missing.canonical".parse().unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_services_lookup() {
        let id: PackageId = "webcam.canonical".parse().unwrap();
        let client = MemoryClient::new().with_services(
            id.clone(),
            vec![ServiceDescriptor {
                name: "stream".to_string(),
                ports: vec![ServicePort {
                    name: "ui".to_string(),
                    port: 8080,
                    external: true,
                }],
            }],
        );

        let services = client.services(&id).await.expect("services");
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].external_port(), Some(8080));

        let none = client
            .services(&"other.canonical".parse().unwrap())
            .await
            .expect("services");
        assert!(none.is_empty());
    }
}
