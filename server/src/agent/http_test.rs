use super::*;

#[test]
fn parse_bare_reply() {
    let json = serde_json::json!({
        "status": "success",
        "result": { "case_id": "DSP-1" }
    })
    .to_string();
    let reply = parse_reply(&json).unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.result["case_id"], "DSP-1");
    assert!(reply.message.is_none());
}

#[test]
fn parse_full_envelope() {
    let json = serde_json::json!({
        "success": true,
        "response": { "status": "success", "result": { "case_id": "DSP-2" }, "message": "ok" }
    })
    .to_string();
    let reply = parse_reply(&json).unwrap();
    assert_eq!(reply.result["case_id"], "DSP-2");
    assert_eq!(reply.message.as_deref(), Some("ok"));
}

#[test]
fn parse_failed_envelope_is_rejected() {
    let json = serde_json::json!({ "success": false, "error": "agent offline" }).to_string();
    let err = parse_reply(&json).unwrap_err();
    assert!(matches!(err, AgentError::Rejected(msg) if msg == "agent offline"));
}

#[test]
fn parse_successful_envelope_without_response_errors() {
    let json = serde_json::json!({ "success": true }).to_string();
    assert!(matches!(parse_reply(&json), Err(AgentError::Parse(_))));
}

#[test]
fn parse_unpacks_stringified_result() {
    let json = serde_json::json!({
        "status": "success",
        "result": "{\"case_id\":\"DSP-3\",\"case_summary\":\"s\"}"
    })
    .to_string();
    let reply = parse_reply(&json).unwrap();
    assert_eq!(reply.result["case_id"], "DSP-3");
}

#[test]
fn parse_keeps_plain_string_result() {
    let json = serde_json::json!({ "status": "success", "result": "just text" }).to_string();
    let reply = parse_reply(&json).unwrap();
    assert_eq!(reply.result, serde_json::json!("just text"));
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_reply("not json"), Err(AgentError::Parse(_))));
    assert!(matches!(parse_reply("[1,2]"), Err(AgentError::Parse(_))));
}

#[test]
fn request_body_uses_configured_agent_id() {
    let body = ApiRequest { agent_id: "abc", message: "hello" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "agent_id": "abc", "message": "hello" })
    );
}
