//! Builder API: page documents, block edits, status changes and previews.

use crate::{ApiError, ApiResult, AppState, blocking};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use pagecraft_builder::BuilderSession;
use pagecraft_model::{ComponentRecord, Page, validate_slug};
use pagecraft_registry::RenderMode;
use pagecraft_render::{EditAction, render_document};
use pagecraft_storage::{PageStore, PageSummary};
use pagecraft_types::{ComponentId, PageId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePageRequest {
    title: String,
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddComponentRequest {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(default)]
    index: Option<usize>,
}

/// Result of routing a canvas control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// False when the control was disabled or the block is not on the page.
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<ComponentId>,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub page: Page,
    pub url: String,
}

pub(crate) fn parse_page_id(raw: &str) -> ApiResult<PageId> {
    PageId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid page id: {raw}")))
}

fn open_session(state: &AppState, id: PageId) -> ApiResult<BuilderSession> {
    Ok(BuilderSession::open(
        id,
        Arc::clone(&state.store) as Arc<dyn PageStore>,
        Arc::clone(&state.registry),
    )?)
}

fn new_session(state: &AppState, page: Page) -> BuilderSession {
    BuilderSession::new(
        page,
        Arc::clone(&state.store) as Arc<dyn PageStore>,
        Arc::clone(&state.registry),
    )
}

fn load_page(state: &AppState, id: PageId) -> ApiResult<Page> {
    state
        .store
        .load_page(id)?
        .ok_or_else(|| ApiError::NotFound(format!("page not found: {id}")))
}

// ── Documents ────────────────────────────────────────────────────

pub(crate) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<PageSummary>>> {
    let pages = blocking(move || Ok(state.store.list_pages()?)).await?;
    Ok(Json(pages))
}

/// Creates a draft. An explicit slug must be free; a slug derived from the
/// title gets a numeric suffix instead of colliding.
pub(crate) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Page>)> {
    let Json(request) = payload?;
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::BadRequest("title must not be empty".into()));
    }
    if let Some(slug) = &request.slug {
        validate_slug(slug)?;
    }

    let page = blocking(move || {
        let mut page = Page::new(title);
        page.slug = match request.slug {
            Some(slug) => slug,
            None => state.store.available_slug(&page.slug)?,
        };
        let mut session = new_session(&state, page);
        session.save()?;
        Ok(session.page().clone())
    })
    .await?;
    info!(page_id = %page.id, slug = %page.slug, "Page created");
    Ok((StatusCode::CREATED, Json(page)))
}

pub(crate) async fn load(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Page>> {
    let id = parse_page_id(&id)?;
    let page = blocking(move || load_page(&state, id)).await?;
    Ok(Json(page))
}

/// Replaces the document's content. Identity, creation time and publication
/// state stay with the stored page; status only moves through the status
/// routes.
pub(crate) async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Page>, JsonRejection>,
) -> ApiResult<Json<Page>> {
    let id = parse_page_id(&id)?;
    let Json(mut page) = payload?;
    validate_slug(&page.slug)?;

    let saved = blocking(move || {
        let existing = load_page(&state, id)?;
        page.id = existing.id;
        page.created_at = existing.created_at;
        page.status = existing.status;
        page.published_at = existing.published_at;

        let mut session = new_session(&state, page);
        session.save()?;
        Ok(session.page().clone())
    })
    .await?;
    Ok(Json(saved))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_page_id(&id)?;
    if blocking(move || Ok(state.store.delete_page(id)?)).await? {
        info!(page_id = %id, "Page deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("page not found: {id}")))
    }
}

// ── Builder edits ────────────────────────────────────────────────

pub(crate) async fn add_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddComponentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ComponentRecord>)> {
    let id = parse_page_id(&id)?;
    let Json(request) = payload?;
    let record = blocking(move || {
        let mut session = open_session(&state, id)?;
        let component_id = match request.index {
            Some(index) => session.add_component_at(index, &request.component_type)?,
            None => session.add_component(&request.component_type)?,
        };
        session.save()?;
        session
            .page()
            .component(component_id)
            .cloned()
            .ok_or(ApiError::Internal)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn apply_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EditAction>, JsonRejection>,
) -> ApiResult<Json<ActionResponse>> {
    let id = parse_page_id(&id)?;
    let Json(action) = payload?;
    let response = blocking(move || {
        let mut session = open_session(&state, id)?;
        let applied = session.apply(action);
        if session.is_dirty() {
            session.save()?;
        }
        Ok(ActionResponse {
            applied,
            selected: session.selected(),
            page: session.page().clone(),
        })
    })
    .await?;
    Ok(Json(response))
}

// ── Status ───────────────────────────────────────────────────────

pub(crate) async fn publish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PublishResponse>> {
    let id = parse_page_id(&id)?;
    let config = Arc::clone(&state.config);
    let page = blocking(move || {
        let mut session = open_session(&state, id)?;
        session.publish()?;
        Ok(session.page().clone())
    })
    .await?;
    info!(page_id = %page.id, slug = %page.slug, "Page published");
    Ok(Json(PublishResponse {
        url: config.public_url(&page.slug),
        page,
    }))
}

pub(crate) async fn unpublish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Page>> {
    let id = parse_page_id(&id)?;
    let page = blocking(move || {
        let mut session = open_session(&state, id)?;
        session.unpublish()?;
        Ok(session.page().clone())
    })
    .await?;
    Ok(Json(page))
}

pub(crate) async fn archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Page>> {
    let id = parse_page_id(&id)?;
    let page = blocking(move || {
        let mut session = open_session(&state, id)?;
        session.archive()?;
        Ok(session.page().clone())
    })
    .await?;
    Ok(Json(page))
}

// ── Rendering ────────────────────────────────────────────────────

async fn render_html(state: AppState, raw_id: &str, mode: RenderMode) -> ApiResult<Html<String>> {
    let id = parse_page_id(raw_id)?;
    let html = blocking(move || {
        let page = load_page(&state, id)?;
        Ok(render_document(&page, mode, &state.registry))
    })
    .await?;
    Ok(Html(html))
}

pub(crate) async fn preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    render_html(state, &id, RenderMode::Preview).await
}

pub(crate) async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    render_html(state, &id, RenderMode::Edit).await
}
