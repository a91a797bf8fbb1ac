//! Package listing and single-package queries

use pkgdash_errors::Result;
use pkgdash_events::{AppEvent, EventEmitter, PackageEvent};
use pkgdash_types::{PackageDescriptor, PackageFilter, PackageId, PackageType};

use crate::context::HandlerCtx;
use crate::payload::{translate, PackagePayload};

/// List packages matching the filter, sorted ascending by name
///
/// Descriptors come back raw; translation to payloads is a per-item
/// concern of the single-package path. The sort is stable, so equal
/// names keep the daemon's order.
///
/// # Errors
///
/// Client errors propagate unchanged; there is no partial result.
pub async fn all_packages(
    ctx: &HandlerCtx,
    filter: &PackageFilter,
) -> Result<Vec<PackageDescriptor>> {
    ctx.emit(AppEvent::Package(PackageEvent::ListStarting));

    let mut packages = ctx.client.list_packages(filter).await?;
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    ctx.emit(AppEvent::Package(PackageEvent::ListCompleted {
        count: packages.len(),
    }));

    Ok(packages)
}

/// Fetch one package and assemble its display payload
///
/// # Errors
///
/// Returns `PackageError::NotFound` when the id is absent; client errors
/// propagate unchanged.
pub async fn package_payload(ctx: &HandlerCtx, id: &PackageId) -> Result<PackagePayload> {
    ctx.emit(AppEvent::Package(PackageEvent::QueryStarting {
        package: id.to_string(),
    }));

    let descriptor = ctx.client.get_package(id).await?;

    // Gadgets never expose a UI port; skip the service query entirely.
    let services = if descriptor.package_type == PackageType::Gadget {
        Vec::new()
    } else {
        ctx.client.services(id).await?
    };

    let payload = translate(
        &descriptor,
        &services,
        &ctx.tracker,
        &ctx.config.general.icons_route,
    );

    ctx.emit(AppEvent::Package(PackageEvent::QueryCompleted {
        package: id.to_string(),
    }));

    Ok(payload)
}
