//! Query results and the caller-owned pagination cursor.

use fundus_core::PatientRecord;

/// One page of a filtered, sorted patient listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    records: Vec<PatientRecord>,
    total: usize,
    offset: usize,
    page_size: usize,
}

impl QueryPage {
    pub(crate) fn new(
        records: Vec<PatientRecord>,
        total: usize,
        offset: usize,
        page_size: usize,
    ) -> Self {
        Self {
            records,
            total,
            offset,
            page_size,
        }
    }

    /// Records on this page, most recent diagnosis first.
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PatientRecord> {
        self.records
    }

    /// Total number of records matching the filters, across all pages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` if another page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.offset + self.page_size < self.total
    }

    /// `true` if a page precedes this one.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }
}

/// Caller-owned pagination state for walking a filtered listing.
///
/// The query engine is stateless per call; the cursor holds the offset
/// between calls. Contract: when the filter criteria change, call
/// [`PageCursor::reset`] before the next query. The engine does not (and
/// cannot) enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    page_size: usize,
}

impl PageCursor {
    /// Creates a cursor at offset 0. A zero `page_size` is bumped to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves forward one page, but only if `page` reported a next page.
    /// Returns whether the cursor moved.
    pub fn advance(&mut self, page: &QueryPage) -> bool {
        if page.has_next() {
            self.offset += self.page_size;
            true
        } else {
            false
        }
    }

    /// Moves back one page, but only if `page` reported a previous page.
    /// Returns whether the cursor moved.
    pub fn retreat(&mut self, page: &QueryPage) -> bool {
        if page.has_prev() {
            self.offset = self.offset.saturating_sub(self.page_size);
            true
        } else {
            false
        }
    }

    /// Rewinds to the first page. Call this whenever filters change.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, offset: usize, page_size: usize) -> QueryPage {
        QueryPage::new(Vec::new(), total, offset, page_size)
    }

    #[test]
    fn test_next_prev_indicators() {
        assert!(page(10, 0, 3).has_next());
        assert!(!page(10, 0, 3).has_prev());

        assert!(page(10, 9, 3).has_prev());
        assert!(!page(10, 9, 3).has_next());

        // Exactly one full page: nothing before or after.
        assert!(!page(3, 0, 3).has_next());
        assert!(!page(3, 0, 3).has_prev());
    }

    #[test]
    fn test_cursor_advance_guarded() {
        let mut cursor = PageCursor::new(3);
        assert!(cursor.advance(&page(10, 0, 3)));
        assert_eq!(cursor.offset(), 3);

        // Last page refuses to advance.
        assert!(!cursor.advance(&page(10, 9, 3)));
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_cursor_retreat_guarded_and_clamped() {
        let mut cursor = PageCursor::new(3);
        assert!(!cursor.retreat(&page(10, 0, 3)));
        assert_eq!(cursor.offset(), 0);

        cursor.advance(&page(10, 0, 3));
        assert!(cursor.retreat(&page(10, 3, 3)));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = PageCursor::new(5);
        cursor.advance(&page(20, 0, 5));
        cursor.advance(&page(20, 5, 5));
        cursor.reset();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_zero_page_size_bumped() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
    }
}
