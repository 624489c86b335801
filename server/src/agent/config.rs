//! Agent configuration parsed from environment variables.

use std::collections::HashMap;

use cases::AgentKind;

use super::types::AgentError;

pub const DEFAULT_AGENT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AGENT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub agent_ids: HashMap<AgentKind, String>,
    pub timeouts: AgentTimeouts,
}

impl AgentConfig {
    /// Build typed agent config from environment variables.
    ///
    /// Required:
    /// - `AGENT_API_URL`
    ///
    /// Optional:
    /// - `AGENT_API_KEY_ENV`: names the env var containing the API key
    /// - `AGENT_ID_*`: per-agent id overrides (see [`AgentKind::id_env_var`])
    /// - `AGENT_REQUEST_TIMEOUT_SECS`: default 60
    /// - `AGENT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::NotConfigured`] when `AGENT_API_URL` is unset or
    /// blank, and [`AgentError::ConfigParse`] when `AGENT_API_KEY_ENV` names a
    /// variable that is not set.
    pub fn from_env() -> Result<Self, AgentError> {
        let api_url = std::env::var("AGENT_API_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AgentError::NotConfigured("AGENT_API_URL not set".into()))?;

        let api_key = match std::env::var("AGENT_API_KEY_ENV") {
            Ok(key_var) => Some(std::env::var(&key_var).map_err(|_| {
                AgentError::ConfigParse(format!("env var {key_var} named by AGENT_API_KEY_ENV is not set"))
            })?),
            Err(_) => None,
        };

        let agent_ids = AgentKind::ALL
            .into_iter()
            .map(|kind| {
                let id = std::env::var(kind.id_env_var())
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| kind.default_id().to_string());
                (kind, id)
            })
            .collect();

        let timeouts = AgentTimeouts {
            request_secs: env_parse_u64("AGENT_REQUEST_TIMEOUT_SECS", DEFAULT_AGENT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("AGENT_CONNECT_TIMEOUT_SECS", DEFAULT_AGENT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, api_key, agent_ids, timeouts })
    }

    /// Configured id for `kind`, falling back to the built-in id.
    #[must_use]
    pub fn agent_id(&self, kind: AgentKind) -> &str {
        self.agent_ids
            .get(&kind)
            .map_or_else(|| kind.default_id(), String::as_str)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
