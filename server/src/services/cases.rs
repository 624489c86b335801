//! Case queue service over the shared repository.

use cases::workflow::{DispositionRequest, DispositionResponse};
use cases::{CaseError, CaseRecord, QueueView};
use tracing::info;

use crate::state::AppState;

pub async fn list(state: &AppState, view: &QueueView) -> Vec<CaseRecord> {
    state.cases.read().await.query(view)
}

/// # Errors
///
/// Returns [`CaseError::NotFound`] for an unknown id.
pub async fn get(state: &AppState, id: &str) -> Result<CaseRecord, CaseError> {
    state
        .cases
        .read()
        .await
        .get(id)
        .ok_or_else(|| CaseError::NotFound(id.to_owned()))
}

/// Apply an analyst disposition: update the case status and report the
/// customer-facing outcome, if the action has one.
///
/// # Errors
///
/// Returns [`CaseError::NotFound`] for an unknown id.
pub async fn record_disposition(
    state: &AppState,
    id: &str,
    request: &DispositionRequest,
) -> Result<DispositionResponse, CaseError> {
    let case = state
        .cases
        .write()
        .await
        .update_status(id, request.action.resulting_status())?;
    let outcome = request.action.outcome();
    info!(
        case_id = %case.id,
        action = %request.action,
        status = %case.status,
        terminal = outcome.is_some(),
        notes_len = request.notes.len(),
        "cases: disposition recorded"
    );
    Ok(DispositionResponse { case, outcome })
}

#[cfg(test)]
#[path = "cases_test.rs"]
mod tests;
