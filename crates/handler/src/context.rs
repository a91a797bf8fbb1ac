//! Handler context for dependency injection

use std::sync::Arc;

use pkgdash_client::PackageClient;
use pkgdash_config::Config;
use pkgdash_errors::{Error, HandlerError};
use pkgdash_events::{EventEmitter, EventSender};
use pkgdash_progress::OperationTracker;

/// Handler context providing access to all collaborators
///
/// One context is built at startup and shared by every request the web
/// layer dispatches into this crate.
pub struct HandlerCtx {
    /// Package daemon client
    pub client: Arc<dyn PackageClient>,
    /// In-flight operation tracker
    pub tracker: OperationTracker,
    /// System configuration
    pub config: Config,
    /// Event sender for progress reporting
    pub tx: EventSender,
}

impl HandlerCtx {
    // No public constructor - use HandlerCtxBuilder instead

    /// Builder for a new context
    #[must_use]
    pub fn builder() -> HandlerCtxBuilder {
        HandlerCtxBuilder::new()
    }
}

impl EventEmitter for HandlerCtx {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }
}

/// Builder for handler contexts
pub struct HandlerCtxBuilder {
    client: Option<Arc<dyn PackageClient>>,
    tracker: Option<OperationTracker>,
    config: Option<Config>,
    tx: Option<EventSender>,
}

impl HandlerCtxBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: None,
            tracker: None,
            config: None,
            tx: None,
        }
    }

    /// Set package daemon client
    #[must_use]
    pub fn with_client(mut self, client: Arc<dyn PackageClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set operation tracker
    #[must_use]
    pub fn with_tracker(mut self, tracker: OperationTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if any required component is missing.
    pub fn build(self) -> Result<HandlerCtx, Error> {
        let client = self.client.ok_or_else(|| HandlerError::MissingComponent {
            component: "client".to_string(),
        })?;

        let tracker = self.tracker.ok_or_else(|| HandlerError::MissingComponent {
            component: "tracker".to_string(),
        })?;

        let config = self.config.ok_or_else(|| HandlerError::MissingComponent {
            component: "config".to_string(),
        })?;

        let tx = self.tx.ok_or_else(|| HandlerError::MissingComponent {
            component: "event_sender".to_string(),
        })?;

        Ok(HandlerCtx {
            client,
            tracker,
            config,
            tx,
        })
    }
}

impl Default for HandlerCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}
