use super::*;
use cases::AgentReply;
use cases::intake::{ELLIPSIS, SUMMARY_MAX_CHARS, Speaker};

fn success(result: serde_json::Value) -> AgentEnvelope {
    AgentEnvelope::ok(AgentReply { status: "success".into(), result, message: None })
}

#[test]
fn default_transcript_is_seeded_with_greeting() {
    let state = IntakeState::default();
    assert_eq!(state.transcript, vec![TranscriptEntry::agent(GREETING)]);
    assert!(state.show_quick_replies());
}

#[test]
fn blank_input_is_ignored() {
    let mut state = IntakeState::default();
    assert_eq!(state.begin_send("   "), None);
    assert_eq!(state.transcript.len(), 1);
    assert!(!state.pending);
}

#[test]
fn send_appends_raw_text_and_hides_quick_replies() {
    let mut state = IntakeState { input: " I never went there ".into(), ..IntakeState::default() };
    let sent = state.begin_send(" I never went there ");
    assert_eq!(sent.as_deref(), Some(" I never went there "));
    assert_eq!(state.transcript[1], TranscriptEntry::user(" I never went there "));
    assert!(state.input.is_empty());
    assert!(state.pending);
    assert!(!state.show_quick_replies());
}

#[test]
fn send_while_pending_is_ignored() {
    let mut state = IntakeState::default();
    state.begin_send("first");
    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state.transcript.len(), 2);
}

#[test]
fn failed_call_appends_one_fallback_and_clears_pending() {
    let mut state = IntakeState::default();
    state.begin_send("My card was stolen");
    assert!(state.finish(None, 0).is_none());

    assert_eq!(state.transcript.len(), 3);
    assert_eq!(state.transcript[2], TranscriptEntry::agent(FALLBACK_REPLY));
    assert!(!state.pending);
}

#[test]
fn rejected_envelope_uses_same_fallback() {
    let mut state = IntakeState::default();
    state.begin_send("This looks like fraud");
    let envelope = AgentEnvelope::failed("E_AGENT_RESPONSE: status 500");
    assert!(state.finish(Some(&envelope), 0).is_none());
    assert_eq!(state.transcript.last().map(|e| e.text.as_str()), Some(FALLBACK_REPLY));
}

#[test]
fn success_appends_case_reply_and_keeps_pending() {
    let mut state = IntakeState::default();
    state.begin_send("I don't recognize this charge");
    let envelope = success(serde_json::json!({"case_id": "DSP-42", "case_summary": "Looks legit."}));
    let result = state.finish(Some(&envelope), 0).unwrap();

    assert_eq!(result.case_id, "DSP-42");
    let last = state.transcript.last().unwrap();
    assert_eq!(last.speaker, Speaker::Agent);
    assert_eq!(
        last.text,
        "Thanks for that information. I've created case DSP-42 and analyzed the evidence. Looks legit."
    );
    assert!(state.pending);
}

#[test]
fn long_summary_is_truncated_in_reply() {
    let mut state = IntakeState::default();
    state.begin_send("help");
    let summary = "x".repeat(SUMMARY_MAX_CHARS + 50);
    let envelope = success(serde_json::json!({"case_id": "DSP-1", "case_summary": summary}));
    state.finish(Some(&envelope), 0);

    let text = &state.transcript.last().unwrap().text;
    let expected_tail = format!("{}{ELLIPSIS}", "x".repeat(SUMMARY_MAX_CHARS));
    assert!(text.ends_with(&expected_tail));
}

#[test]
fn missing_case_id_falls_back_to_timestamp() {
    let mut state = IntakeState::default();
    state.begin_send("help");
    let envelope = success(serde_json::json!({"case_summary": "ok"}));
    state.finish(Some(&envelope), 1_705_000_000_000);
    assert!(state.transcript.last().unwrap().text.contains("case DSP-1705000000000 "));
}

#[test]
fn null_case_fields_still_create_case() {
    let mut state = IntakeState::default();
    state.begin_send("help");
    let envelope = success(serde_json::json!({"case_id": null, "case_summary": null}));
    let result = state.finish(Some(&envelope), 1_705_000_000_000);
    assert!(result.is_some());
    assert!(state.pending);
    let text = &state.transcript.last().unwrap().text;
    assert!(text.contains("case DSP-1705000000000 "));
    assert!(text.ends_with(cases::intake::EMPTY_SUMMARY_REPLY));
    assert!(!text.contains(cases::intake::FALLBACK_REPLY));
}

#[test]
fn can_send_requires_text_and_idle() {
    let mut state = IntakeState { input: "hi".into(), ..IntakeState::default() };
    assert!(state.can_send());
    state.pending = true;
    assert!(!state.can_send());
}
