//! Case detail pane state: the loaded analysis, tabs, and on-demand agent runs.
//!
//! DESIGN
//! ======
//! Each agent-backed section is a [`Fetch`]. Results are tagged with the
//! pane generation they were requested under; a result that arrives after
//! the analyst opened another case, or reopened the same one, is dropped.

#[cfg(test)]
#[path = "case_detail_test.rs"]
mod case_detail_test;

use cases::agent::{EvidenceCorrelatorResult, RiskScoringResult};
use cases::{AgentEnvelope, CaseManagerResult};

/// Load state of one agent-backed section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fetch<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> Fetch<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: serde::de::DeserializeOwned> Fetch<T> {
    /// Settle from a finished call. Results are rendered even when the agent
    /// flags its own status, as long as the payload decodes.
    #[must_use]
    pub fn from_envelope(envelope: Option<&AgentEnvelope>) -> Self {
        envelope
            .and_then(AgentEnvelope::any_result::<T>)
            .map_or(Self::Failed, Self::Ready)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Summary,
    Evidence,
    Timeline,
    Notes,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [Self::Summary, Self::Evidence, Self::Timeline, Self::Notes];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Evidence => "Evidence",
            Self::Timeline => "Timeline",
            Self::Notes => "Notes",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CaseDetailState {
    /// Case the sections below belong to.
    pub case_id: Option<String>,
    /// Bumped on every open. Agent calls carry the value they started under
    /// and settle only if it is still current.
    pub generation: u64,
    pub analysis: Fetch<CaseManagerResult>,
    pub evidence: Fetch<EvidenceCorrelatorResult>,
    pub risk: Fetch<RiskScoringResult>,
    pub tab: DetailTab,
    pub notes: String,
}

impl CaseDetailState {
    /// Reset for a newly selected case and return the new generation. With
    /// `cached` the analysis is ready immediately; otherwise it is marked
    /// loading.
    pub fn open(&mut self, case_id: &str, cached: Option<CaseManagerResult>) -> u64 {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            case_id: Some(case_id.to_owned()),
            generation,
            analysis: cached.map_or(Fetch::Loading, Fetch::Ready),
            ..Self::default()
        };
        generation
    }

    #[must_use]
    pub fn is_current(&self, case_id: &str) -> bool {
        self.case_id.as_deref() == Some(case_id)
    }

    pub fn finish_analysis(&mut self, generation: u64, envelope: Option<&AgentEnvelope>) {
        if self.generation == generation {
            self.analysis = Fetch::from_envelope(envelope);
        }
    }

    pub fn finish_evidence(&mut self, generation: u64, envelope: Option<&AgentEnvelope>) {
        if self.generation == generation {
            self.evidence = Fetch::from_envelope(envelope);
        }
    }

    pub fn finish_risk(&mut self, generation: u64, envelope: Option<&AgentEnvelope>) {
        if self.generation == generation {
            self.risk = Fetch::from_envelope(envelope);
        }
    }
}
