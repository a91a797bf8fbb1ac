#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Dashboard handler layer for pkgdash
//!
//! This crate is the surface a web router calls: it adapts the package
//! daemon client into flat view-model payloads, derives UI-relevant
//! status from descriptors plus live operation tracking, and keeps
//! listings deterministically ordered. It owns no wire protocol and no
//! routing - both stay with the embedder.

mod context;
mod payload;
mod query;

pub use context::{HandlerCtx, HandlerCtxBuilder};
pub use payload::{translate, PackagePayload};
pub use query::{all_packages, package_payload};

use pkgdash_errors::Error;
use pkgdash_types::PackageDescriptor;

/// Query result that can be serialized for the web layer
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum QueryResult {
    /// Raw descriptor listing
    PackageList(Vec<PackageDescriptor>),
    /// Single-package view model
    Package(PackagePayload),
}

impl QueryResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| {
            pkgdash_errors::HandlerError::SerializationError {
                message: e.to_string(),
            }
            .into()
        })
    }
}
