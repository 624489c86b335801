//! Agent identifiers, the call envelope, and the four documented result shapes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the agent service directly. It posts an
//! [`AgentRequest`] to the server, which resolves the [`AgentKind`] to a
//! configured agent id and returns an [`AgentEnvelope`]. The result payload
//! stays a `serde_json::Value` on the wire; callers decode it into the shape
//! matching the agent they invoked.
//!
//! Every result field carries `#[serde(default)]` so partially populated
//! agent output still renders instead of failing the whole decode.

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CaseError;

/// Reply status the agent service uses for a completed analysis.
pub const REPLY_STATUS_SUCCESS: &str = "success";

// =============================================================================
// AGENT IDENTIFIERS
// =============================================================================

/// The five agents reachable through the call interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    CaseManager,
    MerchantIntelligence,
    EvidenceCorrelator,
    RiskScoring,
    Resolution,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        Self::CaseManager,
        Self::MerchantIntelligence,
        Self::EvidenceCorrelator,
        Self::RiskScoring,
        Self::Resolution,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CaseManager => "case-manager",
            Self::MerchantIntelligence => "merchant-intelligence",
            Self::EvidenceCorrelator => "evidence-correlator",
            Self::RiskScoring => "risk-scoring",
            Self::Resolution => "resolution",
        }
    }

    /// Agent id registered with the hosted agent service.
    #[must_use]
    pub fn default_id(self) -> &'static str {
        match self {
            Self::CaseManager => "697ebb94d36f070193f5dfa1",
            Self::MerchantIntelligence => "697ebb44066158e77fde657f",
            Self::EvidenceCorrelator => "697ebb5b066158e77fde6580",
            Self::RiskScoring => "697ebb73066158e77fde6584",
            Self::Resolution => "697ebbb1d36f070193f5dfa2",
        }
    }

    /// Environment variable that overrides [`AgentKind::default_id`].
    #[must_use]
    pub fn id_env_var(self) -> &'static str {
        match self {
            Self::CaseManager => "AGENT_ID_CASE_MANAGER",
            Self::MerchantIntelligence => "AGENT_ID_MERCHANT_INTELLIGENCE",
            Self::EvidenceCorrelator => "AGENT_ID_EVIDENCE_CORRELATOR",
            Self::RiskScoring => "AGENT_ID_RISK_SCORING",
            Self::Resolution => "AGENT_ID_RESOLUTION",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CaseError::UnknownAgent(s.to_owned()))
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Body of `POST /api/agent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub message: String,
    pub agent: AgentKind,
}

/// Reply produced by the agent service for one call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AgentReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == REPLY_STATUS_SUCCESS
    }
}

/// Outcome of one agent call as seen by the browser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<AgentReply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentEnvelope {
    #[must_use]
    pub fn ok(reply: AgentReply) -> Self {
        Self { success: true, response: Some(reply), error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, response: None, error: Some(error.into()) }
    }

    /// Decode the result as `T` when the call succeeded and the agent reported
    /// `success`. Any other combination yields `None`.
    #[must_use]
    pub fn successful_result<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        if !self.success {
            return None;
        }
        let reply = self.response.as_ref()?;
        if !reply.is_success() {
            return None;
        }
        decode_result(&reply.result)
    }

    /// Decode whatever result is present, ignoring the reply status. The case
    /// detail view renders results even when the agent flags them.
    #[must_use]
    pub fn any_result<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        if !self.success {
            return None;
        }
        decode_result(&self.response.as_ref()?.result)
    }
}

/// Agents send `null` for fields they could not fill. Drop those so every
/// result shape falls back to its field defaults.
fn decode_result<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    let mut value = value.clone();
    strip_nulls(&mut value);
    serde_json::from_value(value).ok()
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

// =============================================================================
// CASE MANAGER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantAnalysis {
    pub decoded_name: String,
    pub is_subscription: bool,
    pub confidence: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceSummary {
    pub location_verified: bool,
    pub device_verified: bool,
    pub family_usage_suspected: bool,
    pub evidence_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub friendly_fraud_score: f64,
    pub risk_level: String,
    pub recommendation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseManagerResult {
    pub case_id: String,
    pub cardholder_statement: String,
    pub merchant_analysis: MerchantAnalysis,
    pub evidence_summary: EvidenceSummary,
    pub risk_assessment: RiskAssessment,
    pub case_summary: String,
    pub recommended_action: String,
    pub key_findings: Vec<String>,
    pub next_steps: Vec<String>,
}

impl CaseManagerResult {
    /// `approve_provisional_credit` -> `APPROVE PROVISIONAL CREDIT`.
    #[must_use]
    pub fn recommended_action_display(&self) -> String {
        self.recommended_action.replace('_', " ").to_uppercase()
    }
}

// =============================================================================
// EVIDENCE CORRELATOR
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMatch {
    pub user_was_present: bool,
    pub distance_from_transaction: f64,
    pub user_location_at_time: String,
    pub transaction_location: String,
    pub confidence: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMatch {
    pub device_id_matches: bool,
    pub registered_device: String,
    pub transaction_device_id: String,
    pub is_known_device: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyUsageAnalysis {
    pub potential_family_member: Option<String>,
    pub family_member_likelihood: f64,
    pub supporting_evidence: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceCorrelatorResult {
    pub location_match: LocationMatch,
    pub device_match: DeviceMatch,
    pub family_usage_analysis: FamilyUsageAnalysis,
    pub overall_evidence_score: f64,
    pub red_flags: Vec<String>,
    pub supporting_factors: Vec<String>,
}

// =============================================================================
// RISK SCORING
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAnalysis {
    pub account_age_days: f64,
    pub account_standing: String,
    pub average_monthly_deposits: f64,
    pub deposit_consistency: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeHistory {
    pub total_disputes: f64,
    pub disputes_last_12_months: f64,
    pub win_rate: f64,
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudIndicators {
    pub in_fraud_database: bool,
    pub fraud_alerts: Vec<String>,
    pub velocity_flags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: String,
    pub impact_on_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScoringResult {
    pub friendly_fraud_score: f64,
    pub risk_level: String,
    pub account_analysis: AccountAnalysis,
    pub dispute_history: DisputeHistory,
    pub fraud_indicators: FraudIndicators,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendation: String,
    pub reasoning: String,
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionalCredit {
    pub credited: bool,
    pub credit_amount: f64,
    pub credit_date: String,
    pub reversal_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chargeback {
    pub filed: bool,
    pub chargeback_id: String,
    pub reason_code: String,
    pub network: String,
    pub filing_date: String,
    pub expected_resolution_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionDetails {
    pub provisional_credit: ProvisionalCredit,
    pub chargeback: Chargeback,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracking {
    pub case_status: String,
    pub next_review_date: String,
    pub outcome_updates: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerNotification {
    pub sent: bool,
    pub notification_type: String,
    pub message_preview: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDetails {
    pub transaction_id: String,
    pub amount: f64,
    pub merchant_name: String,
    pub transaction_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionResult {
    pub action_taken: String,
    pub transaction_details: TransactionDetails,
    pub resolution_details: ResolutionDetails,
    pub tracking: Tracking,
    pub customer_notification: CustomerNotification,
    pub compliance_notes: String,
}
