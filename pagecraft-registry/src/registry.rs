//! The component registry and its builder.

use crate::{ComponentType, ComponentTypeDescriptor, RegistryError, RegistryResult};
use pagecraft_model::ComponentRecord;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Picker search/filter over registered types.
///
/// All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypeFilter {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "q")]
    pub query: Option<String>,
}

impl TypeFilter {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    fn accepts(&self, descriptor: &ComponentTypeDescriptor) -> bool {
        let tag_ok = self
            .tag
            .as_deref()
            .filter(|t| !t.is_empty())
            .is_none_or(|t| descriptor.has_tag(t));
        let category_ok = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .is_none_or(|c| descriptor.category.eq_ignore_ascii_case(c));
        let query_ok = self
            .query
            .as_deref()
            .is_none_or(|q| descriptor.matches_query(q));
        tag_ok && category_ok && query_ok
    }
}

/// Collects descriptors before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ComponentTypeDescriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor. A second descriptor for the same type is rejected.
    pub fn register(&mut self, descriptor: ComponentTypeDescriptor) -> RegistryResult<&mut Self> {
        if self
            .entries
            .iter()
            .any(|d| d.component_type == descriptor.component_type)
        {
            return Err(RegistryError::DuplicateType(
                descriptor.type_tag().to_string(),
            ));
        }
        debug!(component_type = %descriptor.component_type, "Registered component type");
        self.entries.push(descriptor);
        Ok(self)
    }

    pub fn build(self) -> ComponentRegistry {
        let index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, d)| (d.component_type, i))
            .collect();
        ComponentRegistry {
            entries: self.entries,
            index,
        }
    }
}

/// Immutable map from component type to descriptor.
///
/// Iteration and listing follow registration order.
pub struct ComponentRegistry {
    entries: Vec<ComponentTypeDescriptor>,
    index: HashMap<ComponentType, usize>,
}

impl ComponentRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding every built-in block.
    pub fn with_builtin_blocks() -> Self {
        let mut builder = Self::builder();
        for descriptor in crate::builtin_descriptors() {
            // Built-ins cover each variant exactly once.
            if let Err(e) = builder.register(descriptor) {
                tracing::error!("Skipping built-in block: {e}");
            }
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentTypeDescriptor> {
        self.entries.iter()
    }

    pub fn get(&self, component_type: ComponentType) -> Option<&ComponentTypeDescriptor> {
        self.index.get(&component_type).map(|&i| &self.entries[i])
    }

    /// Looks up a raw type tag. Unknown or unregistered tags yield `None`.
    pub fn get_by_type(&self, tag: &str) -> Option<&ComponentTypeDescriptor> {
        ComponentType::parse(tag).and_then(|t| self.get(t))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get_by_type(tag).is_some()
    }

    /// Builds a new record of `tag` from a fresh copy of its default content.
    ///
    /// Only reachable from "add block" flows that pick from this registry,
    /// so an unknown tag is an internal inconsistency.
    pub fn create_default_content(&self, tag: &str) -> RegistryResult<ComponentRecord> {
        let descriptor = self
            .get_by_type(tag)
            .ok_or_else(|| RegistryError::TypeNotFound(tag.to_string()))?;
        Ok(ComponentRecord::new(
            descriptor.type_tag(),
            descriptor.default_content.clone(),
        ))
    }

    /// Descriptors accepted by `filter`, in registration order.
    pub fn list_types(&self, filter: &TypeFilter) -> Vec<&ComponentTypeDescriptor> {
        self.entries.iter().filter(|d| filter.accepts(d)).collect()
    }

    /// Distinct categories in registration order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for d in &self.entries {
            if !out.contains(&d.category.as_str()) {
                out.push(&d.category);
            }
        }
        out
    }

    /// Nominal check: content is an object carrying every required key.
    pub fn validate_content(&self, tag: &str, content: &serde_json::Value) -> RegistryResult<()> {
        let descriptor = self
            .get_by_type(tag)
            .ok_or_else(|| RegistryError::TypeNotFound(tag.to_string()))?;
        let invalid = |reason: String| RegistryError::InvalidContent {
            component_type: tag.to_string(),
            reason,
        };
        let object = content
            .as_object()
            .ok_or_else(|| invalid("content must be a JSON object".into()))?;
        if let Some(missing) = descriptor
            .required_fields
            .iter()
            .find(|field| !object.contains_key(**field))
        {
            return Err(invalid(format!("missing field '{missing}'")));
        }
        Ok(())
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_builtin_blocks()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|d| d.type_tag()))
            .finish()
    }
}
