//! Error types for the registry and block renderers.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A descriptor for this type was already registered.
    #[error("component type already registered: {0}")]
    DuplicateType(String),

    /// The type tag has no registered descriptor.
    #[error("component type not found: {0}")]
    TypeNotFound(String),

    /// Content failed the type's nominal validation.
    #[error("invalid content for '{component_type}': {reason}")]
    InvalidContent {
        component_type: String,
        reason: String,
    },
}

/// Raised by a block renderer that cannot make sense of its content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("invalid content: {0}")]
    InvalidContent(String),
}
