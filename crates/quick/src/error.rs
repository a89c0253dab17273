//! Quick form error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use farmlog_auth::AuthzError;
use farmlog_core::DomainError;

/// A validation message attached to one form element.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure of the external log write path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("log storage is unavailable")]
    Unavailable,

    #[error("log was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuickFormError {
    #[error(transparent)]
    Forbidden(#[from] AuthzError),

    /// All field errors found for one submission attempt.
    #[error("submission is invalid ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("failed to create log: {0}")]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl QuickFormError {
    /// Field errors of a validation failure; empty for every other kind.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}
