#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! In-flight operation tracking for pkgdash
//!
//! This crate provides the record of install/remove operations currently
//! running against the package daemon, keyed by package identity:
//! - Concurrency-safe: mutated by install/remove workflows while the
//!   query translator reads it, without external locking
//! - Cheap handles: trackers clone into every handler context
//! - Explicit status merge: one function decides how an in-flight
//!   operation overrides the daemon's own package status
//! - Event integration: tracked/cleared records surface as `PackageEvent`s

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use pkgdash_events::{AppEvent, EventEmitter, EventSender, PackageEvent};
use pkgdash_types::{PackageId, PackageStatus};

/// Kind of operation currently running against a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Install,
    Remove,
}

impl Operation {
    /// The status the dashboard shows while this operation is in flight.
    #[must_use]
    pub fn status(self) -> PackageStatus {
        match self {
            Self::Install => PackageStatus::Installing,
            Self::Remove => PackageStatus::Removing,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => write!(f, "install"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Concurrency-safe record of in-flight operations keyed by package identity
///
/// The tracker is an explicit injected dependency: workflows that drive the
/// daemon add and clear records, the query translator only reads them.
/// Handles are cheap to clone and share one underlying map.
#[derive(Clone, Default)]
pub struct OperationTracker {
    entries: Arc<DashMap<PackageId, Operation>>,
    tx: Option<EventSender>,
}

impl OperationTracker {
    /// Create a new, empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that reports record changes as events
    #[must_use]
    pub fn with_events(tx: EventSender) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            tx: Some(tx),
        }
    }

    /// Record an in-flight operation for a package
    ///
    /// A second add for the same package replaces the previous record;
    /// the daemon serializes operations per package, so the newest record
    /// is the authoritative one.
    pub fn add(&self, id: PackageId, operation: Operation) {
        self.emit(AppEvent::Package(PackageEvent::OperationTracked {
            package: id.to_string(),
            operation: operation.to_string(),
        }));
        self.entries.insert(id, operation);
    }

    /// Clear the record for a package once its operation finished
    ///
    /// Clearing an untracked package is a no-op.
    pub fn done(&self, id: &PackageId) {
        if self.entries.remove(id).is_some() {
            self.emit(AppEvent::Package(PackageEvent::OperationCleared {
                package: id.to_string(),
            }));
        }
    }

    /// Whether an operation is currently tracked for this package
    #[must_use]
    pub fn has(&self, id: &PackageId) -> bool {
        self.entries.contains_key(id)
    }

    /// The tracked operation for this package, if any
    #[must_use]
    pub fn operation(&self, id: &PackageId) -> Option<Operation> {
        self.entries.get(id).map(|entry| *entry.value())
    }

    /// Merge an in-flight operation record over the daemon's own status
    ///
    /// A tracked install reads as `Installing`, a tracked remove as
    /// `Removing`; with no record the base status passes through verbatim.
    #[must_use]
    pub fn effective_status(&self, id: &PackageId, base: PackageStatus) -> PackageStatus {
        self.operation(id).map_or(base, Operation::status)
    }

    /// Number of packages with a tracked operation
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operations are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventEmitter for OperationTracker {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }
}

impl fmt::Debug for OperationTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationTracker")
            .field("tracked", &self.entries.len())
            .finish_non_exhaustive()
    }
}
