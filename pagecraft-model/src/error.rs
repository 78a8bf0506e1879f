//! Error types for the page model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while validating model input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Slug is empty, too long, or contains characters outside `[a-z0-9-]`.
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    /// A lead submission carried no non-empty field.
    #[error("submission has no fields")]
    EmptySubmission,

    /// A submitted field name or value exceeded its length limit.
    #[error("field too long: {0}")]
    FieldTooLong(String),

    /// Unknown page or lead status string.
    #[error("invalid status: {0}")]
    InvalidStatus(String),
}
