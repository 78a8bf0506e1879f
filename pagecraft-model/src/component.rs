use crate::StyleOverrides;
use pagecraft_types::ComponentId;
use serde::{Deserialize, Serialize};

/// One block on a page.
///
/// `component_type` stays a raw string: persisted documents may carry tags
/// this build no longer (or does not yet) know about, and those must survive
/// a load/save cycle untouched. Resolution happens in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub component_type: String,
    /// Payload whose shape is defined by the block type.
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl ComponentRecord {
    /// Creates a visible record with no style overrides.
    pub fn new(component_type: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            id: ComponentId::new(),
            component_type: component_type.into(),
            content,
            style: None,
            visible: Some(true),
        }
    }

    /// Replaces the generated id.
    #[must_use]
    pub fn with_id(mut self, id: ComponentId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// A record is hidden only when `visible` is explicitly `false`.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Extract a string value from `content` using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.content.pointer(pointer).and_then(|v| v.as_str())
    }
}
