//! Filter predicates for the patient query pipeline.

use fundus_core::PatientRecord;
use time::{Date, Duration, OffsetDateTime};

/// Case-insensitive substring match over first name, last name, or the
/// decimal form of the record identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    /// Builds a filter from the raw search query. The needle is lowercased
    /// once here; an empty query matches everything.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            needle: query.into().to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &PatientRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.first_name.to_lowercase().contains(&self.needle)
            || record.last_name.to_lowercase().contains(&self.needle)
            || record.id.to_string().contains(&self.needle)
    }
}

/// Date filtering mode for the diagnosis timestamp.
///
/// Only the calendar date component is compared; the time of day is
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No date filtering.
    #[default]
    All,
    /// Records diagnosed on exactly this date.
    On(Date),
    /// Records diagnosed within `[start, end]` inclusive.
    ///
    /// A range with `start > end` selects nothing; it is never swapped.
    Between { start: Date, end: Date },
}

impl DateFilter {
    /// Records diagnosed today (UTC).
    #[must_use]
    pub fn today() -> Self {
        Self::On(OffsetDateTime::now_utc().date())
    }

    /// Records diagnosed yesterday (UTC).
    #[must_use]
    pub fn yesterday() -> Self {
        Self::On((OffsetDateTime::now_utc() - Duration::days(1)).date())
    }

    #[must_use]
    pub fn matches(&self, record: &PatientRecord) -> bool {
        let date = record.diagnosed_at.date();
        match self {
            Self::All => true,
            Self::On(day) => date == *day,
            Self::Between { start, end } => *start <= date && date <= *end,
        }
    }
}
