use std::ops::Range;

/// Client-side pagination over a list of known length. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Updates the item count and pulls the current page back into range.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.min(self.total_pages());
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1)
    }

    /// Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Index range of the current page within the full list.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(20, 1)]
    #[case(21, 2)]
    #[case(45, 3)]
    fn test_total_pages(#[case] items: usize, #[case] pages: usize) {
        let mut pagination = Pagination::new(20);
        pagination.set_total(items);
        assert_eq!(pagination.total_pages(), pages);
    }

    #[test]
    fn test_cannot_navigate_past_last_page() {
        let mut pagination = Pagination::new(20);
        pagination.set_total(45);
        assert!(pagination.next());
        assert!(pagination.next());
        assert_eq!(pagination.page(), 3);
        assert!(!pagination.has_next());
        assert!(!pagination.next());
        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.range(), 40..45);
    }

    #[test]
    fn test_cannot_navigate_before_first_page() {
        let mut pagination = Pagination::new(20);
        pagination.set_total(45);
        assert!(!pagination.has_prev());
        assert!(!pagination.prev());
        assert_eq!(pagination.range(), 0..20);
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut pagination = Pagination::new(10);
        pagination.set_total(50);
        pagination.go_to(5);
        pagination.set_total(12);
        assert_eq!(pagination.page(), 2);
        assert_eq!(pagination.range(), 10..12);
    }

    #[test]
    fn test_empty_list_range() {
        let pagination = Pagination::new(20);
        assert_eq!(pagination.range(), 0..0);
    }
}
