//! Client for the external dispute-analysis agent service.
//!
//! DESIGN
//! ======
//! Everything the UI shows about a case comes from five hosted agents behind
//! one HTTP endpoint. `AgentCall` is the seam: production uses
//! [`http::HttpAgentClient`], tests substitute a mock. The server never
//! interprets results beyond decoding the reply envelope.

pub mod config;
pub mod http;
pub mod types;

use cases::{AgentKind, AgentReply};
pub use types::AgentError;

/// Provider-neutral async trait for one agent invocation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AgentCall: Send + Sync {
    /// Send `message` to `agent` and return its reply.
    ///
    /// # Errors
    ///
    /// Returns an [`AgentError`] if the request fails, the service answers
    /// with a non-success HTTP status, or the body cannot be decoded.
    async fn call(&self, agent: AgentKind, message: &str) -> Result<AgentReply, AgentError>;
}
