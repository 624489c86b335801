//! Screens, analyst actions, and resolution outcomes.
//!
//! DESIGN
//! ======
//! The confirmed analyst action decides what happens next. Approve and deny
//! produce a customer-facing outcome and move the shell to the resolution
//! screen; escalate and request-info only change the case status.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::record::{CaseRecord, CaseStatus};

/// Top-level screen shown by the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Intake,
    Dashboard,
    Resolution,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Self::Intake, Self::Dashboard, Self::Resolution];

    /// Label on the demo navigation buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Intake => "Customer Intake",
            Self::Dashboard => "Analyst Dashboard",
            Self::Resolution => "Resolution",
        }
    }
}

/// Customer-facing result of a dispute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionOutcome {
    #[default]
    Approved,
    Denied,
}

impl ResolutionOutcome {
    pub const ALL: [ResolutionOutcome; 2] = [Self::Approved, Self::Denied];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Denied => "Denied",
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Approved => "Dispute Approved",
            Self::Denied => "Dispute Denied",
        }
    }

    #[must_use]
    pub fn subline(self) -> &'static str {
        match self {
            Self::Approved => "We have issued a provisional credit to your account",
            Self::Denied => "We were unable to approve your dispute claim",
        }
    }

    #[must_use]
    pub fn case_status(self) -> CaseStatus {
        match self {
            Self::Approved => CaseStatus::Approved,
            Self::Denied => CaseStatus::Denied,
        }
    }
}

/// Disposition an analyst can record from the action panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalystAction {
    Approve,
    Deny,
    RequestInfo,
    Escalate,
}

impl AnalystAction {
    pub const ALL: [AnalystAction; 4] = [Self::Approve, Self::Deny, Self::RequestInfo, Self::Escalate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
            Self::RequestInfo => "request_info",
            Self::Escalate => "escalate",
        }
    }

    /// Button text in the action panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve Credit",
            Self::Deny => "Deny with Explanation",
            Self::RequestInfo => "Request More Info",
            Self::Escalate => "Escalate to Specialist",
        }
    }

    /// Outcome shown to the customer, if this action ends the dispute.
    #[must_use]
    pub fn outcome(self) -> Option<ResolutionOutcome> {
        match self {
            Self::Approve => Some(ResolutionOutcome::Approved),
            Self::Deny => Some(ResolutionOutcome::Denied),
            Self::RequestInfo | Self::Escalate => None,
        }
    }

    /// Case status after the action is recorded.
    #[must_use]
    pub fn resulting_status(self) -> CaseStatus {
        match self {
            Self::Approve => CaseStatus::Approved,
            Self::Deny => CaseStatus::Denied,
            Self::RequestInfo => CaseStatus::Pending,
            Self::Escalate => CaseStatus::Escalated,
        }
    }

    /// Message sent to the resolution agent when this action ends a dispute.
    #[must_use]
    pub fn resolution_prompt(self, record: &CaseRecord, notes: &str) -> String {
        let decision = match self {
            Self::Approve => "Approve the dispute: issue provisional credit and file a chargeback",
            Self::Deny => "Deny the dispute and notify the customer",
            Self::RequestInfo => "Request more information from the customer",
            Self::Escalate => "Escalate the dispute to a specialist",
        };
        let mut prompt = format!(
            "{decision}. Case {} for {}: {} at {} on {}.",
            record.id,
            record.customer_name,
            crate::record::format_usd(record.amount),
            record.merchant,
            record.date
        );
        if !notes.trim().is_empty() {
            prompt.push_str(" Analyst notes: ");
            prompt.push_str(notes.trim());
        }
        prompt
    }
}

impl fmt::Display for AnalystAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalystAction {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "approve" => Ok(Self::Approve),
            "deny" => Ok(Self::Deny),
            "request_info" => Ok(Self::RequestInfo),
            "escalate" => Ok(Self::Escalate),
            _ => Err(CaseError::UnknownAction(s.to_owned())),
        }
    }
}

/// Body of `POST /api/cases/{id}/disposition`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispositionRequest {
    pub action: AnalystAction,
    #[serde(default)]
    pub notes: String,
}

/// Response of `POST /api/cases/{id}/disposition`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispositionResponse {
    pub case: CaseRecord,
    pub outcome: Option<ResolutionOutcome>,
}
