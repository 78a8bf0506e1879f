//! Error types for builder sessions.

use pagecraft_model::ModelError;
use pagecraft_registry::RegistryError;
use pagecraft_storage::StorageError;
use pagecraft_types::{ComponentId, PageId};
use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("page not found: {0}")]
    PageNotFound(PageId),

    #[error("component not found: {0}")]
    ComponentNotFound(ComponentId),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Persisting the page failed; the session still holds the unsaved edits.
    #[error("save failed: {0}")]
    Save(#[source] StorageError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
