//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Agent failures reported
//! inside a 200 envelope are not errors at this layer; the caller decides
//! how to render them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cases::workflow::DispositionResponse;
use cases::{AgentEnvelope, AgentKind, AnalystAction};

pub const AGENT_ENDPOINT: &str = "/api/agent";

#[cfg(any(test, feature = "hydrate"))]
fn disposition_endpoint(case_id: &str) -> String {
    format!("/api/cases/{case_id}/disposition")
}

#[cfg(any(test, feature = "hydrate"))]
fn agent_request_body(agent: AgentKind, message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message, "agent": agent })
}

#[cfg(any(test, feature = "hydrate"))]
fn disposition_body(action: AnalystAction, notes: &str) -> serde_json::Value {
    serde_json::json!({ "action": action, "notes": notes })
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Invoke one agent through `POST /api/agent`. A single attempt.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server
/// answers with a non-success status, or the body is not an envelope.
pub async fn call_agent(agent: AgentKind, message: &str) -> Result<AgentEnvelope, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(AGENT_ENDPOINT)
            .json(&agent_request_body(agent, message))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("agent", resp.status()));
        }
        resp.json::<AgentEnvelope>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (agent, message);
        Err("not available on server".to_owned())
    }
}

/// Record an analyst decision via `POST /api/cases/{id}/disposition`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn record_disposition(
    case_id: &str,
    action: AnalystAction,
    notes: &str,
) -> Result<DispositionResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&disposition_endpoint(case_id))
            .json(&disposition_body(action, notes))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("disposition", resp.status()));
        }
        resp.json::<DispositionResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (case_id, action, notes);
        Err("not available on server".to_owned())
    }
}
