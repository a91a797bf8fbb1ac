#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Package daemon client capability for pkgdash
//!
//! The handler layer never talks a wire protocol itself; it consumes this
//! object-safe trait and lets the embedder decide which adapter to wire in.
//! The trait default for single-package lookup scans the full listing, so
//! adapters whose daemon offers a native "get by id" call simply override
//! `get_package`.

mod memory;

pub use memory::MemoryClient;

use async_trait::async_trait;

use pkgdash_errors::{PackageError, Result};
use pkgdash_types::{PackageDescriptor, PackageFilter, PackageId, ServiceDescriptor};

/// Read-only view of the package daemon
///
/// Object-safe so handler contexts can hold `Arc<dyn PackageClient>`.
#[async_trait]
pub trait PackageClient: Send + Sync {
    /// List packages known to the daemon, applying the filter daemon-side
    ///
    /// # Errors
    ///
    /// Returns an error when the daemon call fails; errors pass through to
    /// the caller unchanged.
    async fn list_packages(&self, filter: &PackageFilter) -> Result<Vec<PackageDescriptor>>;

    /// Fetch one package by identity
    ///
    /// The default implementation scans the unfiltered listing and matches
    /// on id; adapters with a native lookup should override it.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::NotFound` when the id is absent, or the
    /// underlying daemon error unchanged.
    async fn get_package(&self, id: &PackageId) -> Result<PackageDescriptor> {
        let packages = self.list_packages(&PackageFilter::default()).await?;
        packages
            .into_iter()
            .find(|descriptor| descriptor.id() == *id)
            .ok_or_else(|| {
                PackageError::NotFound {
                    name: id.to_string(),
                }
                .into()
            })
    }

    /// Service metadata for one package
    ///
    /// The default implementation reports no services, which the
    /// translator reads as "no embedded UI".
    ///
    /// # Errors
    ///
    /// Returns the underlying daemon error unchanged.
    async fn services(&self, id: &PackageId) -> Result<Vec<ServiceDescriptor>> {
        let _ = id;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgdash_types::{PackageStatus, PackageType};

    struct ListOnlyClient {
        packages: Vec<PackageDescriptor>,
    }

    #[async_trait]
    impl PackageClient for ListOnlyClient {
        async fn list_packages(&self, _filter: &PackageFilter) -> Result<Vec<PackageDescriptor>> {
            Ok(self.packages.clone())
        }
    }

    fn descriptor(name: &str, origin: &str) -> PackageDescriptor {
        PackageDescriptor {
            name: name.to_string(),
            origin: origin.to_string(),
            version: "1.0".to_string(),
            package_type: PackageType::App,
            description: String::new(),
            icon: String::new(),
            download_size: 0,
            installed_size: 0,
            status: PackageStatus::Installed,
        }
    }

    #[tokio::test]
    async fn test_default_get_scans_listing() {
        let client = ListOnlyClient {
            packages: vec![descriptor("editor", "canonical"), descriptor("chatroom", "ogra")],
        };

        let id: PackageId = "chatroom.ogra".parse().unwrap();
        let found = client.get_package(&id).await.expect("get");
        assert_eq!(found.name, "chatroom");
        assert_eq!(found.origin, "ogra");
    }

    #[tokio::test]
    async fn test_default_get_not_found() {
        let client = ListOnlyClient { packages: vec![] };
        let id: PackageId = "chatroom.ogra".parse().unwrap();
        let err = client.get_package(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_default_services_is_empty() {
        let client = ListOnlyClient { packages: vec![] };
        let id: PackageId = "chatroom.ogra".parse().unwrap();
        assert!(client.services(&id).await.expect("services").is_empty());
    }
}
