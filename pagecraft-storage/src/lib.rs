//! SQLite storage layer for Pagecraft.
//!
//! Persists page documents and captured leads.
//!
//! # Architecture
//!
//! - A page is stored as one row; its ordered component list is a JSON
//!   document column, saved and loaded whole
//! - Slugs are unique across pages; a collision on save is reported, not merged
//! - Leads reference their page and are removed with it
//! - Concurrent writers are not coordinated: the last save wins
//!
//! [`PageStore`] and [`LeadStore`] are the seams the builder and the HTTP
//! service depend on; [`SqliteStore`] implements both.

mod error;
mod export;
mod sqlite;
mod store;

pub use error::{StorageError, StorageResult};
pub use sqlite::SqliteStore;
pub use store::{LeadStore, PageStore, PageSummary};
