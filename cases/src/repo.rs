//! Case repository seam.
//!
//! The queue is fixture data today. [`CaseRepository`] is the boundary a
//! real store would implement; [`InMemoryCaseRepository`] keeps records in
//! insertion order so unsorted listings stay deterministic.

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

use crate::error::CaseError;
use crate::queue::{self, QueueView};
use crate::record::{CaseRecord, CaseStatus, sample_cases};

pub trait CaseRepository: Send + Sync {
    /// All records in storage order.
    fn list(&self) -> Vec<CaseRecord>;

    fn get(&self, id: &str) -> Option<CaseRecord>;

    /// Set the status of one record and return the updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::NotFound`] if no record has this id.
    fn update_status(&mut self, id: &str, status: CaseStatus) -> Result<CaseRecord, CaseError>;

    /// Filtered and sorted listing.
    fn query(&self, view: &QueueView) -> Vec<CaseRecord> {
        queue::apply(&self.list(), view)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: Vec<CaseRecord>,
}

impl InMemoryCaseRepository {
    #[must_use]
    pub fn new(cases: Vec<CaseRecord>) -> Self {
        Self { cases }
    }

    /// Repository seeded with the sample queue.
    #[must_use]
    pub fn with_samples() -> Self {
        Self::new(sample_cases())
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn list(&self) -> Vec<CaseRecord> {
        self.cases.clone()
    }

    fn get(&self, id: &str) -> Option<CaseRecord> {
        self.cases.iter().find(|c| c.id == id).cloned()
    }

    fn update_status(&mut self, id: &str, status: CaseStatus) -> Result<CaseRecord, CaseError> {
        let record = self
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CaseError::NotFound(id.to_owned()))?;
        record.status = status;
        Ok(record.clone())
    }
}
