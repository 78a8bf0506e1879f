use crate::{BlockRenderer, ComponentType};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Registry entry: renderer plus the metadata the picker shows.
#[derive(Clone)]
pub struct ComponentTypeDescriptor {
    pub component_type: ComponentType,
    pub name: String,
    pub description: String,
    /// Picker grouping (e.g. "headers", "forms").
    pub category: String,
    /// Payload copied into every new instance of this type.
    pub default_content: serde_json::Value,
    pub tags: BTreeSet<String>,
    /// Top-level content keys checked by nominal validation.
    pub required_fields: Vec<&'static str>,
    pub renderer: Arc<dyn BlockRenderer>,
}

impl ComponentTypeDescriptor {
    /// Creates a descriptor named after its tag with empty default content.
    pub fn new(component_type: ComponentType, renderer: Arc<dyn BlockRenderer>) -> Self {
        Self {
            component_type,
            name: component_type.as_str().to_string(),
            description: String::new(),
            category: "general".to_string(),
            default_content: serde_json::Value::Object(serde_json::Map::new()),
            tags: BTreeSet::new(),
            required_fields: Vec::new(),
            renderer,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_default_content(mut self, content: serde_json::Value) -> Self {
        self.default_content = content;
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_required_fields(mut self, fields: &[&'static str]) -> Self {
        self.required_fields = fields.to_vec();
        self
    }

    /// The tag stored in component records.
    pub fn type_tag(&self) -> &'static str {
        self.component_type.as_str()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over tag, name, description and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.type_tag().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

impl fmt::Debug for ComponentTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTypeDescriptor")
            .field("component_type", &self.component_type)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
