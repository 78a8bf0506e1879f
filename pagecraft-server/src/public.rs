//! Public surface: published pages and lead capture.

use crate::{ApiError, ApiResult, AppState, blocking};
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::Form;
use pagecraft_model::{Lead, Page};
use pagecraft_registry::{ComponentType, RenderMode};
use pagecraft_registry::html::escape_html;
use pagecraft_render::{render_document, render_unavailable};
use pagecraft_storage::{LeadStore, PageStore};
use pagecraft_types::{ComponentId, LeadId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Hidden form input naming the contact form block that was submitted.
const COMPONENT_FIELD: &str = "component_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCreated {
    pub id: LeadId,
}

/// `key` is a page id or slug. Anything not published gets the
/// "not available" document.
pub(crate) async fn page(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Response> {
    let rendered = blocking(move || {
        let page = state.store.find_published(&key)?;
        if page.is_none() {
            debug!(key = %key, "Public page not available");
        }
        Ok(page.map(|page| render_document(&page, RenderMode::Published, &state.registry)))
    })
    .await?;
    match rendered {
        Some(html) => Ok(Html(html).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Html(render_unavailable())).into_response()),
    }
}

/// Accepts a form-encoded or JSON submission for a published page.
///
/// Browser form posts get a small confirmation document back; JSON callers
/// get the new lead id.
pub(crate) async fn submit_lead(
    State(state): State<AppState>,
    Path(key): Path<String>,
    request: Request,
) -> ApiResult<Response> {
    let lookup = state.clone();
    let page = blocking(move || {
        lookup
            .store
            .find_published(&key)?
            .ok_or_else(|| ApiError::NotFound(format!("page not available: {key}")))
    })
    .await?;

    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    let raw: Vec<(String, String)> = if is_json {
        let Json(object) = Json::<serde_json::Map<String, Value>>::from_request(request, &()).await?;
        object
            .into_iter()
            .filter_map(|(name, value)| scalar_text(value).map(|v| (name, v)))
            .collect()
    } else {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &()).await?;
        pairs
    };

    let mut component_id = None;
    let mut fields = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        if name == COMPONENT_FIELD {
            let id = ComponentId::parse(value.trim())
                .map_err(|_| ApiError::BadRequest(format!("invalid component id: {value}")))?;
            require_contact_form(&page, id)?;
            component_id = Some(id);
        } else {
            fields.push((name, value));
        }
    }

    let lead = Lead::from_submission(page.id, component_id, fields, Timestamp::now())?;
    let lead = blocking(move || {
        state.store.save_lead(&lead)?;
        Ok(lead)
    })
    .await?;
    info!(lead_id = %lead.id, page_id = %page.id, fields = lead.fields.len(), "Lead captured");

    if is_json {
        Ok((StatusCode::CREATED, Json(LeadCreated { id: lead.id })).into_response())
    } else {
        Ok((StatusCode::CREATED, Html(thank_you(&page.title))).into_response())
    }
}

/// Submissions may only name a contact form block on the page.
fn require_contact_form(page: &Page, id: ComponentId) -> ApiResult<()> {
    let record = page
        .component(id)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown form component: {id}")))?;
    if ComponentType::parse(&record.component_type) != Some(ComponentType::ContactForm) {
        return Err(ApiError::BadRequest(format!(
            "component {id} is a {} block, not a contact form",
            record.component_type
        )));
    }
    Ok(())
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn thank_you(title: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>Thank you</title></head>"#,
            r#"<body><main><h1>Thank you</h1><p>Your message to {} was received.</p></main></body></html>"#
        ),
        escape_html(title)
    )
}
