#![recursion_limit = "256"]

mod agent;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use cases::InMemoryCaseRepository;
use tracing_subscriber::EnvFilter;

use crate::agent::AgentCall;
use crate::agent::http::HttpAgentClient;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Agent client is optional: without it every agent call answers with a failure envelope.
    let agent: Option<Arc<dyn AgentCall>> = match HttpAgentClient::from_env() {
        Ok(client) => {
            tracing::info!(api_url = client.api_url(), "agent client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(code = e.error_code(), error = %e, "agent client not configured; agent calls will fail");
            None
        }
    };

    let state = state::AppState::new(InMemoryCaseRepository::with_samples(), agent);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos frontend unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dispute-triage listening");
    axum::serve(listener, app).await.expect("server failed");
}
