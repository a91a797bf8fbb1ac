//! Handler orchestration error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandlerError {
    #[error("component not found: {component}")]
    MissingComponent { component: String },

    #[error("invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl crate::UserFacingError for HandlerError {
    fn user_message(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(self.to_string())
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::MissingComponent { .. } => "handler.missing_component",
            Self::InvalidFilter { .. } => "handler.invalid_filter",
            Self::SerializationError { .. } => "handler.serialization_error",
        })
    }
}
