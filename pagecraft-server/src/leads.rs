//! Lead dashboard endpoints.

use crate::pages::parse_page_id;
use crate::{ApiError, ApiResult, AppState, blocking};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json};
use pagecraft_model::{Lead, LeadStatus};
use pagecraft_storage::LeadStore;
use pagecraft_types::{LeadId, PageId, Timestamp};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeadQuery {
    #[serde(default)]
    page_id: Option<String>,
}

impl LeadQuery {
    fn page_id(&self) -> ApiResult<Option<PageId>> {
        self.page_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_page_id)
            .transpose()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    status: LeadStatus,
}

fn parse_lead_id(raw: &str) -> ApiResult<LeadId> {
    LeadId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid lead id: {raw}")))
}

pub(crate) async fn list(
    State(state): State<AppState>,
    query: Result<Query<LeadQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Lead>>> {
    let Query(query) = query?;
    let page_id = query.page_id()?;
    let leads = blocking(move || Ok(state.store.list_leads(page_id)?)).await?;
    Ok(Json(leads))
}

pub(crate) async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<Lead>> {
    let id = parse_lead_id(&id)?;
    let Json(request) = payload?;
    let lead = blocking(move || {
        if !state
            .store
            .update_lead_status(id, request.status, Timestamp::now())?
        {
            return Err(ApiError::NotFound(format!("lead not found: {id}")));
        }
        state
            .store
            .load_lead(id)?
            .ok_or_else(|| ApiError::NotFound(format!("lead not found: {id}")))
    })
    .await?;
    Ok(Json(lead))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_lead_id(&id)?;
    if blocking(move || Ok(state.store.delete_lead(id)?)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("lead not found: {id}")))
    }
}

pub(crate) async fn export(
    State(state): State<AppState>,
    query: Result<Query<LeadQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let page_id = query.page_id()?;
    let csv = blocking(move || Ok(state.store.export_leads_csv(page_id)?)).await?;
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, r#"attachment; filename="leads.csv""#),
        ],
        csv,
    ))
}
