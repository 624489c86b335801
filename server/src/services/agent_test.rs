use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockAgent, test_app_state, test_app_state_with_agent};
use cases::{AgentKind, CaseManagerResult};

fn request(agent: AgentKind, message: &str) -> AgentRequest {
    AgentRequest { message: message.to_owned(), agent }
}

#[tokio::test]
async fn invoke_without_agent_reports_not_configured() {
    let state = test_app_state();
    let envelope = invoke(&state, &request(AgentKind::CaseManager, "hi")).await;
    assert!(!envelope.success);
    assert!(envelope.error.unwrap().starts_with("E_AGENT_NOT_CONFIGURED"));
}

#[tokio::test]
async fn invoke_rejects_blank_message_without_calling_agent() {
    let mock = Arc::new(MockAgent::new(vec![]));
    let state = test_app_state_with_agent(mock.clone());
    let envelope = invoke(&state, &request(AgentKind::CaseManager, "   ")).await;
    assert!(!envelope.success);
    assert!(mock.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invoke_success_wraps_reply() {
    let mock = Arc::new(MockAgent::success(serde_json::json!({
        "case_id": "DSP-7",
        "case_summary": "Summary"
    })));
    let state = test_app_state_with_agent(mock.clone());
    let envelope = invoke(&state, &request(AgentKind::CaseManager, "I don't recognize this charge")).await;

    assert!(envelope.success);
    let result: CaseManagerResult = envelope.successful_result().unwrap();
    assert_eq!(result.case_id, "DSP-7");

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (AgentKind::CaseManager, "I don't recognize this charge".to_owned()));
}

#[tokio::test]
async fn invoke_failure_becomes_failed_envelope() {
    let mock = Arc::new(MockAgent::new(vec![Err(AgentError::Response { status: 503, body: "down".into() })]));
    let state = test_app_state_with_agent(mock);
    let envelope = invoke(&state, &request(AgentKind::Resolution, "approve")).await;

    assert!(!envelope.success);
    assert!(envelope.response.is_none());
    assert_eq!(envelope.error.as_deref(), Some("E_AGENT_RESPONSE: agent response error: status 503"));
}

#[tokio::test]
async fn invoke_makes_a_single_attempt() {
    let mock = Arc::new(MockAgent::new(vec![
        Err(AgentError::Request("timeout".into())),
        Ok(cases::AgentReply { status: "success".into(), result: serde_json::json!({}), message: None }),
    ]));
    let state = test_app_state_with_agent(mock.clone());
    let envelope = invoke(&state, &request(AgentKind::RiskScoring, "score")).await;

    assert!(!envelope.success);
    assert_eq!(mock.calls.lock().unwrap().len(), 1);
}
