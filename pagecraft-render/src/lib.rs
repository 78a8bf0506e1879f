//! Page rendering for Pagecraft.
//!
//! [`PageRenderer`] turns an ordered list of component records into an
//! ordered list of HTML fragments for one [`RenderMode`]:
//!
//! - hidden records are skipped before their renderer is consulted,
//! - unknown types (or blocks whose renderer rejects the content) become a
//!   visible placeholder in edit mode and nothing otherwise,
//! - edit mode wraps each block with edit/delete/move controls.
//!
//! The renderer never reorders or deduplicates its input.

mod actions;
mod document;
mod renderer;

pub use actions::{EditAction, EditControls, EditHandler};
pub use document::{render_document, render_unavailable};
pub use renderer::{BlockKind, PageRenderer, RenderedBlock, RenderedPage};

pub use pagecraft_registry::RenderMode;
