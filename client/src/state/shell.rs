//! Top-level screen switcher.
//!
//! DESIGN
//! ======
//! Three screens, one outcome flag. Intake moves to the dashboard when a case
//! is created; a confirmed terminal action moves to resolution. Demo
//! controls may jump anywhere and force the outcome.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use cases::agent::ResolutionResult;
use cases::record::{PINNED_CASE_ID, pinned_transaction};
use cases::{AnalystAction, CaseManagerResult, CaseRecord, ResolutionOutcome, Screen};

#[derive(Clone, Debug, Default)]
pub struct ShellState {
    pub screen: Screen,
    pub outcome: ResolutionOutcome,
    /// Analysis produced by the intake conversation, reused by the dashboard.
    pub intake_result: Option<CaseManagerResult>,
    /// Case the analyst resolved, if the resolution screen was reached by a decision.
    pub resolved_case: Option<CaseRecord>,
    /// Filing details from the resolution agent.
    pub resolution: Option<ResolutionResult>,
}

impl ShellState {
    pub fn on_case_submitted(&mut self, result: CaseManagerResult) {
        self.intake_result = Some(result);
        self.screen = Screen::Dashboard;
    }

    /// Apply a confirmed analyst action. Returns `true` when the shell moved
    /// to the resolution screen.
    pub fn on_action_confirmed(
        &mut self,
        action: AnalystAction,
        record: CaseRecord,
        resolution: Option<ResolutionResult>,
    ) -> bool {
        let Some(outcome) = action.outcome() else {
            return false;
        };
        self.outcome = outcome;
        self.resolved_case = Some(record);
        self.resolution = resolution;
        self.screen = Screen::Resolution;
        true
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn force_outcome(&mut self, outcome: ResolutionOutcome) {
        self.outcome = outcome;
    }

    /// Amount shown on the resolution screen.
    #[must_use]
    pub fn disputed_amount(&self) -> f64 {
        self.resolved_case
            .as_ref()
            .map_or_else(|| pinned_transaction().amount, |c| c.amount)
    }

    /// Case reference shown in the resolution header.
    #[must_use]
    pub fn case_reference(&self) -> String {
        self.resolved_case
            .as_ref()
            .map_or_else(|| PINNED_CASE_ID.to_owned(), |c| c.id.clone())
    }

    /// Intake analysis to show for `case_id` without a new agent call.
    #[must_use]
    pub fn cached_analysis(&self, case_id: &str) -> Option<CaseManagerResult> {
        if case_id == PINNED_CASE_ID {
            self.intake_result.clone()
        } else {
            None
        }
    }
}
