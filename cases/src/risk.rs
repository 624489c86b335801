//! Risk-level classification for badges and progress bars.
//!
//! The level is a pure threshold function of the current score. Queue rows
//! carry 0-100 integer scores while agent results carry 0-1 fractions; both
//! go through [`RiskLevel::from_score`] after scaling.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high band on the 0-1 scale.
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;

/// Lower bound (inclusive) of the medium band on the 0-1 scale.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.40;

const HIGH_RISK_PERCENT: f64 = 70.0;
const MEDIUM_RISK_PERCENT: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a score on the 0-1 scale. Non-finite scores are low.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            Self::Low
        } else if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Classify a score on the 0-100 scale. Non-finite scores are low.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        // `0.40 * 100.0` is not exactly 40.0 in binary; keep separate edges.
        if !percent.is_finite() {
            Self::Low
        } else if percent >= HIGH_RISK_PERCENT {
            Self::High
        } else if percent >= MEDIUM_RISK_PERCENT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Color name used as a CSS modifier (`risk-badge--red`).
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "amber",
            Self::High => "red",
        }
    }
}

/// Round a 0-1 fraction to a whole percentage for display, clamped to 0-100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn as_percent(fraction: f64) -> u32 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}
