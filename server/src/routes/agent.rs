//! Agent proxy route.

use axum::extract::State;
use axum::response::Json;
use cases::{AgentEnvelope, AgentKind, AgentRequest};
use serde::Deserialize;

use crate::services;
use crate::state::AppState;

/// Raw agent body. The slug is parsed by hand so an unknown agent is
/// reported in the envelope instead of the extractor's 422.
#[derive(Debug, Deserialize)]
pub struct AgentBody {
    pub agent: String,
    #[serde(default)]
    pub message: String,
}

/// `POST /api/agent`: forward one message to the named agent.
///
/// Always answers 200; failures are reported inside the envelope.
pub async fn call_agent(State(state): State<AppState>, Json(body): Json<AgentBody>) -> Json<AgentEnvelope> {
    let agent = match body.agent.parse::<AgentKind>() {
        Ok(agent) => agent,
        Err(e) => {
            tracing::warn!(agent = %body.agent, error = %e, "agent: unknown agent rejected");
            return Json(AgentEnvelope::failed(e.to_string()));
        }
    };
    let request = AgentRequest { message: body.message, agent };
    Json(services::agent::invoke(&state, &request).await)
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
