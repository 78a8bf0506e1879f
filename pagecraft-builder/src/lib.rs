//! Builder sessions for Pagecraft.
//!
//! A [`BuilderSession`] holds one page in memory while the user edits it.
//! Edits apply immediately to the in-memory document and mark the session
//! dirty; nothing reaches storage until [`BuilderSession::save`] is called.
//! A failed save leaves the session untouched so it can be retried.

mod error;
mod session;

pub use error::{BuilderError, BuilderResult};
pub use session::BuilderSession;
