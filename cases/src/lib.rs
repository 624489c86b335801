//! Shared dispute-case domain model.
//!
//! This crate owns the types and pure rules used by `server`, `client`, and
//! `cli`: case records and the sample queue, risk classification, queue
//! filtering/sorting, agent identifiers and result shapes, intake copy, and
//! the analyst workflow. It performs no I/O.

pub mod agent;
pub mod error;
pub mod intake;
pub mod queue;
pub mod record;
pub mod repo;
pub mod risk;
pub mod workflow;

pub use agent::{AgentEnvelope, AgentKind, AgentReply, AgentRequest, CaseManagerResult};
pub use error::CaseError;
pub use queue::{QueueView, SortKey, StatusFilter};
pub use record::{CaseRecord, CaseStatus, Priority};
pub use repo::{CaseRepository, InMemoryCaseRepository};
pub use risk::RiskLevel;
pub use workflow::{AnalystAction, ResolutionOutcome, Screen};
