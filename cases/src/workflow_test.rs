use super::*;
use crate::record::sample_cases;

#[test]
fn approve_and_deny_are_terminal() {
    assert_eq!(AnalystAction::Approve.outcome(), Some(ResolutionOutcome::Approved));
    assert_eq!(AnalystAction::Deny.outcome(), Some(ResolutionOutcome::Denied));
}

#[test]
fn escalate_and_request_info_are_not_terminal() {
    assert_eq!(AnalystAction::Escalate.outcome(), None);
    assert_eq!(AnalystAction::RequestInfo.outcome(), None);
}

#[test]
fn resulting_status_matches_action() {
    assert_eq!(AnalystAction::Approve.resulting_status(), CaseStatus::Approved);
    assert_eq!(AnalystAction::Deny.resulting_status(), CaseStatus::Denied);
    assert_eq!(AnalystAction::RequestInfo.resulting_status(), CaseStatus::Pending);
    assert_eq!(AnalystAction::Escalate.resulting_status(), CaseStatus::Escalated);
}

#[test]
fn terminal_outcome_status_agrees_with_action_status() {
    for action in AnalystAction::ALL {
        if let Some(outcome) = action.outcome() {
            assert_eq!(outcome.case_status(), action.resulting_status());
        }
    }
}

#[test]
fn action_parses_wire_names() {
    assert_eq!("request_info".parse::<AnalystAction>(), Ok(AnalystAction::RequestInfo));
    assert_eq!("request-info".parse::<AnalystAction>(), Ok(AnalystAction::RequestInfo));
    assert_eq!("ESCALATE".parse::<AnalystAction>(), Ok(AnalystAction::Escalate));
    assert!(matches!("refund".parse::<AnalystAction>(), Err(CaseError::UnknownAction(_))));
}

#[test]
fn action_serializes_snake_case() {
    assert_eq!(serde_json::to_value(AnalystAction::RequestInfo).unwrap(), serde_json::json!("request_info"));
}

#[test]
fn screen_defaults_to_intake() {
    assert_eq!(Screen::default(), Screen::Intake);
    assert_eq!(ResolutionOutcome::default(), ResolutionOutcome::Approved);
}

#[test]
fn resolution_prompt_includes_case_and_notes() {
    let record = &sample_cases()[0];
    let prompt = AnalystAction::Approve.resolution_prompt(record, "  GPS mismatch  ");
    assert!(prompt.starts_with("Approve the dispute"));
    assert!(prompt.contains("SQJOESCAFE-2024-01-15-1459"));
    assert!(prompt.contains("$45.99"));
    assert!(prompt.ends_with("Analyst notes: GPS mismatch"));
}

#[test]
fn resolution_prompt_omits_blank_notes() {
    let record = &sample_cases()[1];
    let prompt = AnalystAction::Deny.resolution_prompt(record, "   ");
    assert!(!prompt.contains("Analyst notes"));
}

#[test]
fn disposition_request_defaults_notes() {
    let req: DispositionRequest = serde_json::from_value(serde_json::json!({ "action": "deny" })).unwrap();
    assert_eq!(req.action, AnalystAction::Deny);
    assert!(req.notes.is_empty());
}
