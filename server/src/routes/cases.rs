//! Case queue routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use cases::workflow::{DispositionRequest, DispositionResponse};
use cases::{AnalystAction, CaseError, CaseRecord, QueueView};
use serde::Deserialize;
use tracing::warn;

use crate::services;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListCasesParams {
    pub status: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

/// Raw disposition body. The action is parsed by hand so an unknown action
/// maps to 400 rather than the extractor's 422.
#[derive(Debug, Deserialize)]
pub struct DispositionBody {
    pub action: String,
    #[serde(default)]
    pub notes: String,
}

pub(crate) fn case_error_to_status(err: &CaseError) -> StatusCode {
    match err {
        CaseError::NotFound(_) => StatusCode::NOT_FOUND,
        CaseError::UnknownStatus(_)
        | CaseError::UnknownFilter(_)
        | CaseError::UnknownSortKey(_)
        | CaseError::UnknownAction(_)
        | CaseError::UnknownAgent(_) => StatusCode::BAD_REQUEST,
    }
}

fn reject(err: &CaseError) -> StatusCode {
    warn!(error = %err, "cases: request rejected");
    case_error_to_status(err)
}

pub(crate) fn view_from_params(params: ListCasesParams) -> Result<QueueView, CaseError> {
    Ok(QueueView {
        status: params.status.as_deref().unwrap_or_default().parse()?,
        query: params.q.unwrap_or_default(),
        sort: match params.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => cases::SortKey::default(),
        },
    })
}

/// `GET /api/cases`: queue filtered by `status` and `q`, sorted by `sort`.
pub async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<ListCasesParams>,
) -> Result<Json<Vec<CaseRecord>>, StatusCode> {
    let view = view_from_params(params).map_err(|e| reject(&e))?;
    Ok(Json(services::cases::list(&state, &view).await))
}

/// `GET /api/cases/{id}`: one case.
pub async fn get_case(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<CaseRecord>, StatusCode> {
    services::cases::get(&state, &id)
        .await
        .map(Json)
        .map_err(|e| reject(&e))
}

/// `POST /api/cases/{id}/disposition`: record an analyst action.
pub async fn record_disposition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DispositionBody>,
) -> Result<Json<DispositionResponse>, StatusCode> {
    let action: AnalystAction = body.action.parse().map_err(|e| reject(&e))?;
    let request = DispositionRequest { action, notes: body.notes };
    services::cases::record_disposition(&state, &id, &request)
        .await
        .map(Json)
        .map_err(|e| reject(&e))
}

#[cfg(test)]
#[path = "cases_test.rs"]
mod tests;
