use crate::BlockError;
use pagecraft_model::StyleOverrides;
use pagecraft_types::{ComponentId, PageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a page is being rendered.
///
/// Chosen once per render pass and passed down; never stored on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Builder canvas: editing affordances and placeholders for unknown blocks.
    Edit,
    /// Author's preview of the page as visitors would see it.
    Preview,
    /// Public page.
    Published,
}

impl RenderMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Preview => "preview",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a block renderer receives for one record.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    pub content: &'a serde_json::Value,
    pub style: Option<&'a StyleOverrides>,
    pub mode: RenderMode,
    pub component_id: ComponentId,
    /// Owning page, when rendering as part of a stored page.
    pub page_id: Option<PageId>,
}

impl<'a> BlockContext<'a> {
    pub fn new(content: &'a serde_json::Value, mode: RenderMode) -> Self {
        Self {
            content,
            style: None,
            mode,
            component_id: ComponentId::new(),
            page_id: None,
        }
    }

    /// The content as a JSON object, or an error for any other shape.
    pub fn object(&self) -> Result<&'a serde_json::Map<String, serde_json::Value>, BlockError> {
        self.content
            .as_object()
            .ok_or_else(|| BlockError::InvalidContent("content must be a JSON object".into()))
    }
}

/// Renders one block type to an HTML fragment.
///
/// Implementations hold no per-record state: the same renderer instance
/// serves every record of its type.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError>;
}
