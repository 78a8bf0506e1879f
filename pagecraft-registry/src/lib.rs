//! Component registry for Pagecraft.
//!
//! The registry is the single mapping from a block type tag to its renderer
//! and picker metadata. It is built once at start-up, then shared read-only
//! by the page renderer, the builder session and the component picker.
//!
//! Persisted records keep their type as a raw string. Resolution goes
//! through [`ComponentType::parse`], so stale or future tags coming back from
//! storage fall into an explicit "unknown" branch instead of failing
//! deserialization.

pub mod blocks;
mod component_type;
mod descriptor;
mod error;
pub mod html;
mod registry;
mod renderer;

pub use blocks::builtin_descriptors;
pub use component_type::ComponentType;
pub use descriptor::ComponentTypeDescriptor;
pub use error::{BlockError, RegistryError, RegistryResult};
pub use registry::{ComponentRegistry, RegistryBuilder, TypeFilter};
pub use renderer::{BlockContext, BlockRenderer, RenderMode};
