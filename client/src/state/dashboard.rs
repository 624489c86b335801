//! Analyst dashboard state: the case queue, its view controls, and selection.
//!
//! DESIGN
//! ======
//! Selection is a case id held apart from the filtered list. A selected case
//! that the current filter hides still shows in the detail pane; only its
//! queue row highlight disappears.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use cases::{AnalystAction, CaseError, CaseRecord, CaseRepository, InMemoryCaseRepository, QueueView};

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub cases: InMemoryCaseRepository,
    pub view: QueueView,
    pub selected: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            cases: InMemoryCaseRepository::with_samples(),
            view: QueueView::default(),
            selected: None,
        }
    }
}

impl DashboardState {
    /// Filtered and sorted queue rows.
    #[must_use]
    pub fn visible(&self) -> Vec<CaseRecord> {
        self.cases.query(&self.view)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// The selected record, looked up in the full queue.
    #[must_use]
    pub fn selected_record(&self) -> Option<CaseRecord> {
        self.selected.as_deref().and_then(|id| self.cases.get(id))
    }

    /// Apply an analyst action to the local queue.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::NotFound`] if the case is not in the queue.
    pub fn apply_action(&mut self, id: &str, action: AnalystAction) -> Result<CaseRecord, CaseError> {
        self.cases.update_status(id, action.resulting_status())
    }
}
