//! Results Pager
//!
//! Page count and navigation enablement derived from the last result page.
//! The pager never changes state itself; it only names a target page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl Pager {
    pub fn new(current_page: u32, page_size: u32, total_count: u64) -> Self {
        Self { current_page, page_size, total_count }
    }

    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 || self.total_count == 0 {
            return 0;
        }
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn can_first(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_next(&self) -> bool {
        (u64::from(self.current_page) + 1) * u64::from(self.page_size) < self.total_count
    }

    pub fn can_last(&self) -> bool {
        self.current_page < self.last_page()
    }

    fn last_page(&self) -> u32 {
        self.total_pages().saturating_sub(1)
    }

    pub fn first(&self) -> Option<u32> {
        self.can_first().then_some(0)
    }

    pub fn previous(&self) -> Option<u32> {
        self.can_previous().then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_next().then(|| self.current_page + 1)
    }

    pub fn last(&self) -> Option<u32> {
        self.can_last().then(|| self.last_page())
    }

    /// "Page X of Y (N total)"
    pub fn summary(&self) -> String {
        let shown = if self.total_pages() == 0 { 0 } else { self.current_page + 1 };
        format!("Page {} of {} ({} total)", shown, self.total_pages(), self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pager::new(0, 10, 25).total_pages(), 3);
        assert_eq!(Pager::new(0, 10, 30).total_pages(), 3);
        assert_eq!(Pager::new(0, 10, 1).total_pages(), 1);
        assert_eq!(Pager::new(0, 10, 0).total_pages(), 0);
        assert_eq!(Pager::new(0, 0, 5).total_pages(), 0);
    }

    #[test]
    fn test_last_page_of_25() {
        let pager = Pager::new(2, 10, 25);
        assert!(!pager.can_next());
        assert!(!pager.can_last());
        assert_eq!(pager.next(), None);
        assert_eq!(pager.previous(), Some(1));
        assert_eq!(pager.first(), Some(0));
    }

    #[test]
    fn test_first_page_of_25() {
        let pager = Pager::new(0, 10, 25);
        assert!(!pager.can_first());
        assert!(!pager.can_previous());
        assert_eq!(pager.next(), Some(1));
        assert_eq!(pager.last(), Some(2));
    }

    #[test]
    fn test_empty_results_disable_everything() {
        let pager = Pager::new(0, 10, 0);
        assert_eq!((pager.first(), pager.previous(), pager.next(), pager.last()), (None, None, None, None));
        assert_eq!(pager.summary(), "Page 0 of 0 (0 total)");
    }

    #[test]
    fn test_summary() {
        assert_eq!(Pager::new(1, 10, 25).summary(), "Page 2 of 3 (25 total)");
    }
}
