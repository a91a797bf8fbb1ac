//! View-model payload assembly

use serde::{Deserialize, Serialize};

use pkgdash_progress::OperationTracker;
use pkgdash_types::{
    PackageDescriptor, PackageStatus, PackageType, ServiceDescriptor,
};

/// Flat view model for one package, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePayload {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub version: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub download_size: u64,
    pub installed_size: u64,
    pub status: PackageStatus,
    pub ui_port: u16,
}

/// Translate one descriptor into its display payload
///
/// Pure function of its inputs: descriptor fields are copied verbatim,
/// status comes from merging the tracker's in-flight record over the
/// descriptor's own status, and the UI port is derived from service
/// metadata. Gadget packages never expose a UI port.
#[must_use]
pub fn translate(
    descriptor: &PackageDescriptor,
    services: &[ServiceDescriptor],
    tracker: &OperationTracker,
    icons_route: &str,
) -> PackagePayload {
    let id = descriptor.id();

    let ui_port = match descriptor.package_type {
        PackageType::Gadget => 0,
        _ => services
            .iter()
            .find_map(ServiceDescriptor::external_port)
            .unwrap_or(0),
    };

    let icon = if descriptor.icon.is_empty() {
        format!("{icons_route}/{id}_icon.png")
    } else {
        descriptor.icon.clone()
    };

    PackagePayload {
        id: id.to_string(),
        name: descriptor.name.clone(),
        origin: descriptor.origin.clone(),
        version: descriptor.version.clone(),
        description: descriptor.description.clone(),
        icon,
        package_type: descriptor.package_type,
        download_size: descriptor.download_size,
        installed_size: descriptor.installed_size,
        status: tracker.effective_status(&id, descriptor.status),
        ui_port,
    }
}
