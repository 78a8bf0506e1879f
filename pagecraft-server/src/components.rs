//! Block picker endpoints.

use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use pagecraft_registry::{ComponentTypeDescriptor, TypeFilter};
use serde::{Deserialize, Serialize};

/// What the picker shows for one block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    #[serde(rename = "type")]
    pub component_type: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub required_fields: Vec<String>,
    pub default_content: serde_json::Value,
}

impl From<&ComponentTypeDescriptor> for ComponentSummary {
    fn from(d: &ComponentTypeDescriptor) -> Self {
        Self {
            component_type: d.type_tag().to_string(),
            name: d.name.clone(),
            description: d.description.clone(),
            category: d.category.clone(),
            tags: d.tags.iter().cloned().collect(),
            required_fields: d.required_fields.iter().map(|f| f.to_string()).collect(),
            default_content: d.default_content.clone(),
        }
    }
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TypeFilter>,
) -> Json<Vec<ComponentSummary>> {
    let summaries = state
        .registry
        .list_types(&filter)
        .into_iter()
        .map(ComponentSummary::from)
        .collect();
    Json(summaries)
}

pub(crate) async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .registry
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
