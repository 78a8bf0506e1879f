//! Page document model for Pagecraft.
//!
//! Defines the records every other subsystem passes around:
//! - [`Page`]: the unit of persistence, owning an ordered component list
//! - [`ComponentRecord`]: one block on a page (type tag, content, style, visibility)
//! - [`StyleOverrides`]: cross-cutting presentation overrides applied by the renderer
//! - [`Lead`]: a form submission captured from a published page
//!
//! List editing is plain synchronous CRUD over `Page::components`; callers
//! persist the whole page explicitly afterwards.

mod component;
mod error;
mod lead;
mod page;
mod style;

pub use component::ComponentRecord;
pub use error::{ModelError, ModelResult};
pub use lead::{Lead, LeadStatus, MAX_FIELD_NAME_LEN, MAX_FIELD_VALUE_LEN};
pub use page::{MAX_SLUG_LEN, MoveDirection, Page, PageStatus, slugify, validate_slug};
pub use style::{ColorOverrides, SpacingOverrides, StyleOverrides};
