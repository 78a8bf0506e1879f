//! HTTP API for Pagecraft.
//!
//! Routes:
//! - `/api/v1/components`: the block picker
//! - `/api/v1/pages`: page documents, builder edits, status changes, previews
//! - `/api/v1/leads`: the lead dashboard and CSV export
//! - `/p/{key}`: published pages and their form submissions

mod components;
pub mod config;
mod error;
mod leads;
mod pages;
mod public;

pub use components::ComponentSummary;
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorBody};
pub(crate) use error::blocking;
pub use pages::{ActionResponse, PublishResponse};
pub use public::LeadCreated;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use pagecraft_registry::ComponentRegistry;
use pagecraft_storage::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteStore>,
    pub registry: Arc<ComponentRegistry>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: SqliteStore, registry: ComponentRegistry, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub site_name: String,
    pub component_types: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        site_name: state.config.site_name.clone(),
        component_types: state.registry.len(),
    })
}

/// Build the HTTP API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/components", get(components::list))
        .route("/api/v1/components/categories", get(components::categories))
        .route("/api/v1/pages", get(pages::list).post(pages::create))
        .route(
            "/api/v1/pages/{id}",
            get(pages::load).put(pages::replace).delete(pages::remove),
        )
        .route("/api/v1/pages/{id}/components", post(pages::add_component))
        .route("/api/v1/pages/{id}/actions", post(pages::apply_action))
        .route("/api/v1/pages/{id}/publish", post(pages::publish))
        .route("/api/v1/pages/{id}/unpublish", post(pages::unpublish))
        .route("/api/v1/pages/{id}/archive", post(pages::archive))
        .route("/api/v1/pages/{id}/preview", get(pages::preview))
        .route("/api/v1/pages/{id}/edit", get(pages::edit))
        .route("/api/v1/leads", get(leads::list))
        .route("/api/v1/leads/export", get(leads::export))
        .route(
            "/api/v1/leads/{id}",
            axum::routing::patch(leads::update_status).delete(leads::remove),
        )
        .route("/p/{key}", get(public::page))
        .route("/p/{key}/leads", post(public::submit_lead))
        .with_state(state)
}
