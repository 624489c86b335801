//! Case records and the fixture queue.
//!
//! DESIGN
//! ======
//! Records are plain data. Dates stay in ISO `YYYY-MM-DD` form so that
//! lexicographic order is chronological order, which keeps the queue sort a
//! pure string comparison with no calendar parsing.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaseError;

/// Lifecycle status of a dispute case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Approved,
    Denied,
    Escalated,
}

impl CaseStatus {
    /// All statuses in queue-filter display order.
    pub const ALL: [CaseStatus; 4] = [Self::Pending, Self::Escalated, Self::Approved, Self::Denied];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Escalated => "escalated",
        }
    }

    /// Capitalized label used in filter dropdowns.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Denied => "Denied",
            Self::Escalated => "Escalated",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            "escalated" => Ok(Self::Escalated),
            _ => Err(CaseError::UnknownStatus(s.to_owned())),
        }
    }
}

/// Review priority tier assigned at intake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One row of the analyst case queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    pub customer_name: String,
    /// Disputed amount in USD.
    pub amount: f64,
    pub merchant: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub status: CaseStatus,
    /// Friendly-fraud risk on a 0-100 scale.
    pub risk_score: u8,
    pub priority: Priority,
}

impl CaseRecord {
    /// Narrative handed to the case-manager agent when an analyst opens
    /// this case.
    #[must_use]
    pub fn analysis_prompt(&self) -> String {
        format!(
            "I see a charge for {} from '{}' on {}. I don't recognize this charge.",
            format_usd(self.amount),
            self.merchant,
            self.date
        )
    }

    /// Message for the evidence-correlator agent.
    #[must_use]
    pub fn evidence_prompt(&self) -> String {
        format!(
            "Correlate location, device, and family usage evidence for case {}: {} at '{}' on {} disputed by {}.",
            self.id,
            format_usd(self.amount),
            self.merchant,
            self.date,
            self.customer_name
        )
    }

    /// Message for the risk-scoring agent.
    #[must_use]
    pub fn risk_prompt(&self) -> String {
        format!(
            "Score the friendly fraud risk for case {}: {} disputes a {} charge from '{}' on {}.",
            self.id,
            self.customer_name,
            format_usd(self.amount),
            self.merchant,
            self.date
        )
    }
}

/// Format an amount as `$45.99`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Queue id of the transaction disputed on the intake screen.
pub const PINNED_CASE_ID: &str = "SQJOESCAFE-2024-01-15-1459";

/// The transaction pinned to the top of the intake screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinnedTransaction {
    pub amount: f64,
    pub merchant: String,
    pub date: String,
    pub status: String,
}

/// The disputed transaction shown on the intake screen.
#[must_use]
pub fn pinned_transaction() -> PinnedTransaction {
    PinnedTransaction {
        amount: 45.99,
        merchant: "SQ *JOES CAFE".to_owned(),
        date: "Jan 15, 2024 2:30 PM".to_owned(),
        status: "Posted".to_owned(),
    }
}

/// The fixed sample queue loaded at startup.
#[must_use]
pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            id: PINNED_CASE_ID.to_owned(),
            customer_name: "Alex Johnson".to_owned(),
            amount: 45.99,
            merchant: "SQ *JOES CAFE".to_owned(),
            date: "2024-01-15".to_owned(),
            status: CaseStatus::Pending,
            risk_score: 68,
            priority: Priority::High,
        },
        CaseRecord {
            id: "DSP-2024-001235".to_owned(),
            customer_name: "Maria Garcia".to_owned(),
            amount: 129.99,
            merchant: "AMAZON.COM".to_owned(),
            date: "2024-01-14".to_owned(),
            status: CaseStatus::Pending,
            risk_score: 23,
            priority: Priority::Low,
        },
        CaseRecord {
            id: "DSP-2024-001236".to_owned(),
            customer_name: "James Chen".to_owned(),
            amount: 599.00,
            merchant: "BEST BUY".to_owned(),
            date: "2024-01-13".to_owned(),
            status: CaseStatus::Escalated,
            risk_score: 82,
            priority: Priority::High,
        },
    ]
}
