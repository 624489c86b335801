//! Case-queue filtering, search, and sorting.
//!
//! DESIGN
//! ======
//! [`apply`] is a pure function of `(cases, view)`. The dashboard recomputes
//! it on every input change instead of caching, so the visible list can never
//! drift from the filter controls.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::record::{CaseRecord, CaseStatus};

/// Status dropdown value: a single status or everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CaseStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: CaseStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }

    /// Dropdown options in display order.
    #[must_use]
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(Self::All)
            .chain(CaseStatus::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<CaseStatus>()
            .map(Self::Only)
            .map_err(|_| CaseError::UnknownFilter(s.to_owned()))
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Queue ordering key. Every key sorts descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Risk,
    Amount,
    Date,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Risk, Self::Amount, Self::Date];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Amount => "amount",
            Self::Date => "date",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Risk => "Sort by Risk",
            Self::Amount => "Sort by Amount",
            Self::Date => "Sort by Date",
        }
    }

    /// Descending comparison of two records under this key.
    fn compare(self, a: &CaseRecord, b: &CaseRecord) -> Ordering {
        match self {
            Self::Risk => b.risk_score.cmp(&a.risk_score),
            Self::Amount => b.amount.total_cmp(&a.amount),
            Self::Date => b.date.cmp(&a.date),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "risk" => Ok(Self::Risk),
            "amount" => Ok(Self::Amount),
            "date" => Ok(Self::Date),
            _ => Err(CaseError::UnknownSortKey(s.to_owned())),
        }
    }
}

/// The three queue controls: status filter, search text, and sort key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueView {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sort: SortKey,
}

impl QueueView {
    /// Case-insensitive substring match on merchant or customer name.
    /// An empty query matches everything.
    #[must_use]
    pub fn matches_query(&self, record: &CaseRecord) -> bool {
        let needle = self.query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.merchant.to_lowercase().contains(&needle) || record.customer_name.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn retains(&self, record: &CaseRecord) -> bool {
        self.status.matches(record.status) && self.matches_query(record)
    }
}

/// Filter by status, then by search text, then stable-sort descending.
#[must_use]
pub fn apply(cases: &[CaseRecord], view: &QueueView) -> Vec<CaseRecord> {
    let mut visible: Vec<CaseRecord> = cases.iter().filter(|c| view.retains(c)).cloned().collect();
    // `sort_by` is stable: equal keys keep their input order.
    visible.sort_by(|a, b| view.sort.compare(a, b));
    visible
}
