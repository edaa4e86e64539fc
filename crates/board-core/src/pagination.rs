//! Pagination windowing - which page numbers to show as navigation links.

/// Paging configuration: how many posts per page and how many page
/// numbers the navigation strip shows.
///
/// Both sizes are programming invariants, not user input; a zero size
/// fails fast in the constructor.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    page_size: u64,
    window_size: u64,
}

impl Pager {
    /// # Panics
    ///
    /// Panics if `page_size` or `window_size` is zero.
    pub fn new(page_size: u64, window_size: u64) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        assert!(window_size > 0, "window_size must be positive");
        Self {
            page_size,
            window_size,
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Last page number for `total_items` posts; 0 when the board is empty.
    pub fn last_page(&self, total_items: u64) -> u64 {
        total_items.div_ceil(self.page_size)
    }

    /// Compute the navigation window around `current_page`.
    ///
    /// Returns a strictly ascending, gap-free run of page numbers, each in
    /// `[1, last_page]`, at most `window_size` long. An empty board yields
    /// an empty window.
    ///
    /// `current_page` comes from untrusted input: 0 clamps up to 1, and a
    /// page past the end anchors the window at the last valid page. The
    /// clamp affects only which neighbors appear in the strip; callers
    /// fetching items must use the page number they were asked for, not
    /// the anchor.
    pub fn window(&self, current_page: u64, total_items: u64) -> Vec<u64> {
        let last_page = self.last_page(total_items);
        let current = current_page.clamp(1, last_page.max(1));

        let half = self.window_size / 2;
        let start = if current <= half { 1 } else { current - half };
        let end = last_page.min(start.saturating_add(self.window_size - 1));

        // end < start only when last_page == 0
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> Pager {
        Pager::new(4, 5)
    }

    #[test]
    fn empty_board_yields_empty_window() {
        assert!(pager().window(1, 0).is_empty());
        assert!(pager().window(7, 0).is_empty());
    }

    #[test]
    fn nine_posts_fit_in_three_pages() {
        assert_eq!(pager().window(1, 9), vec![1, 2, 3]);
    }

    #[test]
    fn window_caps_at_window_size() {
        assert_eq!(pager().window(1, 100), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(pager().window(10, 100), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_stops_at_last_page() {
        // last_page = 25
        assert_eq!(pager().window(25, 100), vec![23, 24, 25]);
        assert_eq!(pager().window(24, 100), vec![22, 23, 24, 25]);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        assert_eq!(pager().window(0, 100), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_past_end_anchors_at_last_page() {
        // last_page = 3; requesting page 99 still shows the valid strip
        assert_eq!(pager().window(99, 9), vec![1, 2, 3]);
    }

    #[test]
    fn single_page_board() {
        assert_eq!(pager().window(1, 3), vec![1]);
    }

    #[test]
    fn every_window_is_ascending_and_in_range() {
        let pager = pager();
        for total in 0..60u64 {
            let last = pager.last_page(total);
            for current in 0..20u64 {
                let window = pager.window(current, total);
                assert!(window.len() as u64 <= 5);
                for pair in window.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
                for page in &window {
                    assert!(*page >= 1 && *page <= last);
                }
            }
        }
    }

    #[test]
    fn extreme_page_and_total_do_not_overflow() {
        let pager = Pager::new(1, 5);
        assert_eq!(
            pager.window(u64::MAX, u64::MAX),
            vec![u64::MAX - 2, u64::MAX - 1, u64::MAX]
        );
    }

    #[test]
    fn arbitrary_sizes_are_honored() {
        let pager = Pager::new(10, 3);
        assert_eq!(pager.window(5, 95), vec![4, 5, 6]);
        assert_eq!(pager.window(1, 95), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn zero_page_size_is_a_programming_error() {
        Pager::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "window_size must be positive")]
    fn zero_window_size_is_a_programming_error() {
        Pager::new(4, 0);
    }
}
