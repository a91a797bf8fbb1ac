//! Domain event definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pkgdash_errors::UserFacingError;

/// Structured failure information shared across domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureContext {
    /// Optional stable error code once taxonomy lands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short user-facing message.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether retrying the operation might succeed.
    pub retryable: bool,
}

impl FailureContext {
    /// Build failure context from a `UserFacingError` implementation.
    #[must_use]
    pub fn from_error<E: UserFacingError + ?Sized>(error: &E) -> Self {
        Self {
            code: error.user_code().map(str::to_string),
            message: error.user_message().into_owned(),
            hint: error.user_hint().map(str::to_string),
            retryable: error.is_retryable(),
        }
    }
}

/// Top-level event type covering all domains
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum AppEvent {
    General(GeneralEvent),
    Package(PackageEvent),
}

/// General utility events for warnings, errors, and operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralEvent {
    /// Generic warning message with optional context
    Warning {
        message: String,
        context: Option<String>,
    },

    /// Generic error message with optional details
    Error {
        message: String,
        details: Option<String>,
    },

    /// Debug logging with structured context
    DebugLog {
        message: String,
        context: HashMap<String, String>,
    },

    /// Generic operation started notification
    OperationStarted { operation: String },

    /// Generic operation completion with success status
    OperationCompleted { operation: String, success: bool },

    /// Generic operation failure with error details
    OperationFailed { operation: String, error: String },
}

impl GeneralEvent {
    /// Debug log without structured context
    pub fn debug(message: impl Into<String>) -> Self {
        Self::DebugLog {
            message: message.into(),
            context: HashMap::new(),
        }
    }

    /// Warning without extra context
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
            context: None,
        }
    }

    /// Error without details
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            details: None,
        }
    }

    /// Error carrying structured failure information
    #[must_use]
    pub fn failure(failure: &FailureContext) -> Self {
        Self::Error {
            message: failure.message.clone(),
            details: failure.hint.clone(),
        }
    }
}

/// Package query events surfaced by the handler layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PackageEvent {
    /// List operation starting
    ListStarting,

    /// List operation completed
    ListCompleted { count: usize },

    /// Single-package query starting
    QueryStarting { package: String },

    /// Single-package query completed
    QueryCompleted { package: String },

    /// An install/remove operation was recorded for a package
    OperationTracked { package: String, operation: String },

    /// The in-flight operation record for a package was cleared
    OperationCleared { package: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgdash_errors::ClientError;

    #[test]
    fn test_failure_context_from_error() {
        let err = ClientError::DaemonUnavailable;
        let failure = FailureContext::from_error(&err);
        assert_eq!(failure.code.as_deref(), Some("client.unavailable"));
        assert!(failure.retryable);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = AppEvent::Package(PackageEvent::ListCompleted { count: 3 });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"domain\":\"Package\""));
        assert!(json.contains("\"type\":\"ListCompleted\""));
    }
}
