//! Render context: which records a display pass shows
//!
//! Pure function of (master sequence, filter state). The master order is the
//! display order; eligibility and tag filtering only remove entries.

use std::fmt;

use serde::Serialize;

use crate::filter::FilterState;
use crate::records::ProjectRecord;

/// A record together with its position in the master sequence
///
/// The position is the stable card identifier used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub index: usize,
    pub record: &'a ProjectRecord,
}

/// Visible-vs-total counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectCount {
    /// Records passing the tag filter
    pub shown: usize,
    /// Eligible records, independent of filtering
    pub total: usize,
}

impl fmt::Display for ProjectCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing: {}/{}", self.shown, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub eligible: Vec<Entry<'a>>,
    pub visible: Vec<Entry<'a>>,
    pub count: ProjectCount,
}

impl<'a> RenderContext<'a> {
    /// Compute the eligible and visible subsets for one display pass
    ///
    /// With a non-empty filter list a record is visible when any of its tags
    /// is selected (OR across selected tags).
    pub fn compute(records: &'a [ProjectRecord], filters: &FilterState) -> Self {
        let eligible: Vec<Entry<'a>> = eligible_entries(records).collect();

        let visible: Vec<Entry<'a>> = if filters.is_empty() {
            eligible.clone()
        } else {
            eligible
                .iter()
                .copied()
                .filter(|entry| entry.record.matches_any(filters.tags()))
                .collect()
        };

        let count = ProjectCount {
            shown: visible.len(),
            total: eligible.len(),
        };

        Self {
            eligible,
            visible,
            count,
        }
    }

    /// Eligible records in master order, without the entry wrapper
    pub fn eligible_records(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        self.eligible.iter().map(|entry| entry.record)
    }
}

/// Records that may be shown at all, with their master positions
pub fn eligible_entries(records: &[ProjectRecord]) -> impl Iterator<Item = Entry<'_>> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_eligible())
        .map(|(index, record)| Entry { index, record })
}
