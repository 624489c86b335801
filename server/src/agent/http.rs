//! HTTP client for the hosted agent service.
//!
//! Thin wrapper over one `POST` endpoint. Pure parsing in `parse_reply` for
//! testability.

use std::time::Duration;

use cases::{AgentEnvelope, AgentKind, AgentReply};
use serde_json::Value;

use super::AgentCall;
use super::config::AgentConfig;
use super::types::AgentError;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAgentClient {
    http: reqwest::Client,
    config: AgentConfig,
}

impl HttpAgentClient {
    /// Build a client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AgentError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not configured or the HTTP client fails.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::new(AgentConfig::from_env()?)
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }
}

#[async_trait::async_trait]
impl AgentCall for HttpAgentClient {
    async fn call(&self, agent: AgentKind, message: &str) -> Result<AgentReply, AgentError> {
        let body = ApiRequest { agent_id: self.config.agent_id(agent), message };

        let mut request = self.http.post(&self.config.api_url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AgentError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AgentError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(AgentError::Response { status: status.as_u16(), body: text });
        }

        parse_reply(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    agent_id: &'a str,
    message: &'a str,
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a service response body. Accepts either a bare reply
/// (`{status, result, message?}`) or a full envelope (`{success, response}`).
/// A `result` delivered as a JSON-encoded string is unpacked.
fn parse_reply(json: &str) -> Result<AgentReply, AgentError> {
    let value: Value = serde_json::from_str(json).map_err(|e| AgentError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(AgentError::Parse("response body is not a JSON object".into()));
    }

    let mut reply = if value.get("success").is_some() {
        let envelope: AgentEnvelope = serde_json::from_value(value).map_err(|e| AgentError::Parse(e.to_string()))?;
        if !envelope.success {
            return Err(AgentError::Rejected(
                envelope.error.unwrap_or_else(|| "no error detail".to_owned()),
            ));
        }
        envelope
            .response
            .ok_or_else(|| AgentError::Parse("successful envelope without response".into()))?
    } else {
        serde_json::from_value::<AgentReply>(value).map_err(|e| AgentError::Parse(e.to_string()))?
    };

    let unpacked = match &reply.result {
        Value::String(raw) => serde_json::from_str::<Value>(raw).ok().filter(Value::is_object),
        _ => None,
    };
    if let Some(inner) = unpacked {
        reply.result = inner;
    }

    Ok(reply)
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
