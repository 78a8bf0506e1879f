//! Core type definitions for Pagecraft.
//!
//! This crate defines the small, domain-agnostic types every other crate
//! builds on:
//! - Page, component and lead identifiers (UUID v7)
//! - Millisecond wall-clock timestamps
//!
//! Page documents, component records and leads live in `pagecraft-model`.

mod ids;
mod timestamp;

pub use ids::{ComponentId, LeadId, PageId};
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
