//! Agent error taxonomy.

/// Errors produced by agent client operations.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// No agent endpoint is configured.
    #[error("agent service not configured: {0}")]
    NotConfigured(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the agent service failed.
    #[error("agent request failed: {0}")]
    Request(String),

    /// The agent service returned a non-success HTTP status.
    #[error("agent response error: status {status}")]
    Response { status: u16, body: String },

    /// The agent service response body could not be deserialized.
    #[error("agent response parse failed: {0}")]
    Parse(String),

    /// The agent service answered with an explicit failure envelope.
    #[error("agent rejected the request: {0}")]
    Rejected(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AgentError {
    /// Grepable code for logs and envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured(_) => "E_AGENT_NOT_CONFIGURED",
            Self::ConfigParse(_) => "E_AGENT_CONFIG_PARSE",
            Self::Request(_) => "E_AGENT_REQUEST",
            Self::Response { .. } => "E_AGENT_RESPONSE",
            Self::Parse(_) => "E_AGENT_PARSE",
            Self::Rejected(_) => "E_AGENT_REJECTED",
            Self::HttpClientBuild(_) => "E_AGENT_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether a later identical call could succeed. Reported only; calls are
    /// never retried automatically.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
