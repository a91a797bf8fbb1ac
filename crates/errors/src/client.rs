//! Package daemon client error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientError {
    #[error("daemon request failed: {message}")]
    RequestFailed { message: String },

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("daemon request timed out: {operation}")]
    Timeout { operation: String },

    #[error("package daemon unavailable")]
    DaemonUnavailable,
}

impl UserFacingError for ClientError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ConnectionRefused(_) | Self::DaemonUnavailable => {
                Some("Check that the package daemon is running and its socket is reachable.")
            }
            Self::Timeout { .. } => Some("Retry once the daemon is responsive again."),
            Self::RequestFailed { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionRefused(_) | Self::DaemonUnavailable
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::RequestFailed { .. } => "client.request_failed",
            Self::ConnectionRefused(_) => "client.connection_refused",
            Self::Timeout { .. } => "client.timeout",
            Self::DaemonUnavailable => "client.unavailable",
        })
    }
}
