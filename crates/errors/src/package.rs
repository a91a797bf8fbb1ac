//! Package-related error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageError {
    #[error("package not found: {name}")]
    NotFound { name: String },

    #[error("invalid package id: {input}")]
    InvalidId { input: String },
}

impl crate::UserFacingError for PackageError {
    fn user_message(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => None,
            Self::InvalidId { .. } => Some("Package ids take the form <name>.<origin>."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::NotFound { .. } => "package.not_found",
            Self::InvalidId { .. } => "package.invalid_id",
        })
    }
}
