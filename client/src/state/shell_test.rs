use super::*;
use cases::record::sample_cases;

fn record(idx: usize) -> CaseRecord {
    sample_cases().remove(idx)
}

#[test]
fn starts_on_intake_with_approved_outcome() {
    let shell = ShellState::default();
    assert_eq!(shell.screen, Screen::Intake);
    assert_eq!(shell.outcome, ResolutionOutcome::Approved);
}

#[test]
fn case_submission_moves_to_dashboard_and_keeps_result() {
    let mut shell = ShellState::default();
    let result = CaseManagerResult { case_id: "DSP-9".into(), ..CaseManagerResult::default() };
    shell.on_case_submitted(result.clone());
    assert_eq!(shell.screen, Screen::Dashboard);
    assert_eq!(shell.intake_result, Some(result));
}

#[test]
fn deny_moves_to_denied_resolution() {
    let mut shell = ShellState { screen: Screen::Dashboard, ..ShellState::default() };
    assert!(shell.on_action_confirmed(AnalystAction::Deny, record(1), None));
    assert_eq!(shell.screen, Screen::Resolution);
    assert_eq!(shell.outcome, ResolutionOutcome::Denied);
    assert_eq!(shell.case_reference(), "DSP-2024-001235");
    assert!((shell.disputed_amount() - 129.99).abs() < f64::EPSILON);
}

#[test]
fn escalate_and_request_info_stay_on_dashboard() {
    for action in [AnalystAction::Escalate, AnalystAction::RequestInfo] {
        let mut shell = ShellState { screen: Screen::Dashboard, ..ShellState::default() };
        assert!(!shell.on_action_confirmed(action, record(0), None));
        assert_eq!(shell.screen, Screen::Dashboard);
        assert!(shell.resolved_case.is_none());
    }
}

#[test]
fn demo_controls_navigate_and_force_outcome() {
    let mut shell = ShellState::default();
    shell.navigate(Screen::Resolution);
    shell.force_outcome(ResolutionOutcome::Denied);
    assert_eq!(shell.screen, Screen::Resolution);
    assert_eq!(shell.outcome, ResolutionOutcome::Denied);
}

#[test]
fn resolution_defaults_to_pinned_transaction() {
    let shell = ShellState::default();
    assert_eq!(shell.case_reference(), PINNED_CASE_ID);
    assert!((shell.disputed_amount() - 45.99).abs() < f64::EPSILON);
}

#[test]
fn cached_analysis_only_for_pinned_case() {
    let mut shell = ShellState::default();
    shell.on_case_submitted(CaseManagerResult::default());
    assert!(shell.cached_analysis(PINNED_CASE_ID).is_some());
    assert!(shell.cached_analysis("DSP-2024-001236").is_none());
}
