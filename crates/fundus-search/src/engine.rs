//! Query construction and pipeline execution.

use fundus_core::PatientRecord;

use crate::filter::{DateFilter, TextFilter};
use crate::page::{PageCursor, QueryPage};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A filtered, sorted, paginated view over a doctor's patient records.
///
/// Filters compose conjunctively; both are optional. Execution never
/// mutates the input slice. The query itself is stateless: pagination
/// state belongs to a caller-owned [`PageCursor`], and by contract the
/// caller resets that cursor whenever it changes the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientQuery {
    text: Option<TextFilter>,
    date: DateFilter,
    offset: usize,
    page_size: usize,
}

impl PatientQuery {
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: None,
            date: DateFilter::All,
            offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Adds a text filter. An empty query string is treated as no filter.
    #[must_use]
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let filter = TextFilter::new(query);
        self.text = if filter.is_empty() { None } else { Some(filter) };
        self
    }

    /// Sets the date filtering mode.
    #[must_use]
    pub fn with_date(mut self, filter: DateFilter) -> Self {
        self.date = filter;
        self
    }

    /// Sets the pagination window. A zero `page_size` is bumped to 1.
    #[must_use]
    pub fn with_page(mut self, offset: usize, page_size: usize) -> Self {
        self.offset = offset;
        self.page_size = page_size.max(1);
        self
    }

    /// Takes the pagination window from a caller-owned cursor.
    #[must_use]
    pub fn with_cursor(self, cursor: &PageCursor) -> Self {
        self.with_page(cursor.offset(), cursor.page_size())
    }

    /// Runs the pipeline: filter, sort descending by diagnosis timestamp,
    /// paginate. Operates on an owned copy of the matching records.
    #[must_use]
    pub fn run(&self, records: &[PatientRecord]) -> QueryPage {
        let mut matched: Vec<PatientRecord> = records
            .iter()
            .filter(|r| self.text.as_ref().is_none_or(|t| t.matches(r)))
            .filter(|r| self.date.matches(r))
            .cloned()
            .collect();

        // sort_by is stable, so equal timestamps keep their pre-sort order.
        matched.sort_by(|a, b| b.diagnosed_at.cmp(&a.diagnosed_at));

        let total = matched.len();
        let page: Vec<PatientRecord> = matched
            .into_iter()
            .skip(self.offset)
            .take(self.page_size)
            .collect();

        tracing::debug!(
            total,
            offset = self.offset,
            page_len = page.len(),
            "patient query executed"
        );
        QueryPage::new(page, total, self.offset, self.page_size)
    }
}

impl Default for PatientQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundus_core::{DiagnosedAt, DiagnosisLabel, DoctorId, Gender, PatientId};
    use std::str::FromStr;
    use time::macros::date;

    fn record(id: u64, first: &str, last: &str, diagnosed_at: &str) -> PatientRecord {
        PatientRecord {
            id: PatientId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            age: 50,
            gender: Gender::Other,
            diagnosis: DiagnosisLabel::Glaucoma,
            diagnosed_at: DiagnosedAt::from_str(diagnosed_at).unwrap(),
            email: None,
            phone: None,
            notes: String::new(),
            doctor_id: DoctorId::new(1),
        }
    }

    /// P1..P3 from the diagnosis-date ordering scenario: created in id
    /// order, but P2 has the most recent diagnosis.
    fn p1_p2_p3() -> Vec<PatientRecord> {
        vec![
            record(1, "P1", "X", "2024-01-01T10:00:00Z"),
            record(2, "P2", "X", "2024-01-03T09:00:00Z"),
            record(3, "P3", "X", "2024-01-02T12:00:00Z"),
        ]
    }

    fn ids(page: &QueryPage) -> Vec<u64> {
        page.records().iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_sort_descending_by_diagnosis_timestamp() {
        let page = PatientQuery::new().run(&p1_p2_p3());
        assert_eq!(ids(&page), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let records = p1_p2_p3();
        let _ = PatientQuery::new().run(&records);
        assert_eq!(records[0].id, PatientId::new(1));
        assert_eq!(records[2].id, PatientId::new(3));
    }

    #[test]
    fn test_stable_sort_keeps_tie_order() {
        let records = vec![
            record(10, "A", "X", "2024-01-01T10:00:00Z"),
            record(11, "B", "X", "2024-01-01T10:00:00Z"),
            record(12, "C", "X", "2024-01-01T10:00:00Z"),
        ];
        let page = PatientQuery::new().run(&records);
        assert_eq!(ids(&page), vec![10, 11, 12]);
    }

    #[test]
    fn test_pagination_scenario() {
        let records = p1_p2_p3();

        let first = PatientQuery::new().with_page(0, 2).run(&records);
        assert_eq!(ids(&first), vec![2, 3]);
        assert!(first.has_next());
        assert!(!first.has_prev());

        let second = PatientQuery::new().with_page(2, 2).run(&records);
        assert_eq!(ids(&second), vec![1]);
        assert!(!second.has_next());
        assert!(second.has_prev());
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let page = PatientQuery::new().with_page(10, 2).run(&p1_p2_p3());
        assert!(page.is_empty());
        assert_eq!(page.total(), 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_pagination_sweep_visits_everything_once() {
        // N = 7, P = 3: expect pages of 3, 3, 1.
        let records: Vec<PatientRecord> = (0..7)
            .map(|i| {
                record(
                    i + 1,
                    &format!("P{i}"),
                    "X",
                    &format!("2024-01-0{}T10:00:00Z", 7 - i),
                )
            })
            .collect();

        let mut cursor = PageCursor::new(3);
        let mut seen: Vec<u64> = Vec::new();
        let mut pages = 0;
        loop {
            let page = PatientQuery::new().with_cursor(&cursor).run(&records);
            pages += 1;
            seen.extend(page.records().iter().map(|r| r.id.get()));
            if !cursor.advance(&page) {
                break;
            }
        }

        assert_eq!(pages, 3);
        let full = PatientQuery::new().with_page(0, 7).run(&records);
        assert_eq!(seen, ids(&full));
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_text_filter_applied() {
        let records = vec![
            record(1, "John", "Doe", "2024-01-01T10:00:00Z"),
            record(2, "Amy", "Lee", "2024-01-02T10:00:00Z"),
        ];
        let page = PatientQuery::new().with_text("jo").run(&records);
        assert_eq!(ids(&page), vec![1]);

        // Empty query means no filtering at all.
        let page = PatientQuery::new().with_text("").run(&records);
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let records = vec![
            record(1, "John", "Doe", "2024-01-01T10:00:00Z"),
            record(2, "John", "Lee", "2024-01-02T10:00:00Z"),
            record(3, "Amy", "Doe", "2024-01-01T12:00:00Z"),
        ];
        let page = PatientQuery::new()
            .with_text("john")
            .with_date(DateFilter::On(date!(2024 - 01 - 01)))
            .run(&records);
        assert_eq!(ids(&page), vec![1]);
    }

    #[test]
    fn test_inverted_range_yields_empty_page() {
        let query = PatientQuery::new().with_date(DateFilter::Between {
            start: date!(2024 - 02 - 01),
            end: date!(2024 - 01 - 01),
        });
        let page = query.run(&p1_p2_p3());
        assert!(page.is_empty());
        assert_eq!(page.total(), 0);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_empty_input_is_valid_empty_result() {
        let page = PatientQuery::new().run(&[]);
        assert!(page.is_empty());
        assert_eq!(page.total(), 0);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }
}
