//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the case repository behind an async `RwLock` and the optional agent
//! client. A missing agent client is not fatal: agent calls answer with a
//! failure envelope and the rest of the app keeps working.

use std::sync::Arc;

use cases::CaseRepository;
use tokio::sync::RwLock;

use crate::agent::AgentCall;

/// Shared application state. Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub cases: Arc<RwLock<dyn CaseRepository>>,
    /// Agent client. `None` if `AGENT_API_URL` is not configured.
    pub agent: Option<Arc<dyn AgentCall>>,
}

impl AppState {
    #[must_use]
    pub fn new<R: CaseRepository + 'static>(repo: R, agent: Option<Arc<dyn AgentCall>>) -> Self {
        let cases: Arc<RwLock<dyn CaseRepository>> = Arc::new(RwLock::new(repo));
        Self { cases, agent }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
