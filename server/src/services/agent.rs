//! Agent proxy service: one browser request, one agent call.
//!
//! DESIGN
//! ======
//! Every failure is folded into an `AgentEnvelope` with `success: false` so
//! the browser has a single shape to handle. The error code stays in the
//! envelope text and in the log line; nothing is retried.

use cases::{AgentEnvelope, AgentRequest};
use tracing::{info, warn};
use uuid::Uuid;

use crate::agent::AgentError;
use crate::state::AppState;

/// Forward `request` to the configured agent client.
pub async fn invoke(state: &AppState, request: &AgentRequest) -> AgentEnvelope {
    let request_id = Uuid::new_v4();
    info!(%request_id, agent = %request.agent, message_len = request.message.len(), "agent: call received");

    if request.message.trim().is_empty() {
        warn!(%request_id, agent = %request.agent, "agent: empty message rejected");
        return AgentEnvelope::failed("message is empty");
    }

    let Some(client) = state.agent.as_ref() else {
        let err = AgentError::NotConfigured("AGENT_API_URL not set".into());
        warn!(%request_id, code = err.error_code(), "agent: call without configured service");
        return AgentEnvelope::failed(describe(&err));
    };

    match client.call(request.agent, &request.message).await {
        Ok(reply) => {
            info!(%request_id, agent = %request.agent, status = %reply.status, "agent: reply received");
            AgentEnvelope::ok(reply)
        }
        Err(err) => {
            warn!(
                %request_id,
                agent = %request.agent,
                code = err.error_code(),
                retryable = err.retryable(),
                error = %err,
                "agent: call failed"
            );
            AgentEnvelope::failed(describe(&err))
        }
    }
}

fn describe(err: &AgentError) -> String {
    format!("{}: {err}", err.error_code())
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
