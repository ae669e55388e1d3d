//! Presentation helpers derived from page state.
//!
//! These are pure functions of `(current_page, page_size, total_items)`: the
//! "Showing 11-20 of 27" range, which navigation controls are live, and the
//! page-size selector options. They hold no state and never touch the items.

/// Page sizes offered by the page-size selector.
///
/// A UI convention only; [`Pager`](super::Pager) accepts any positive size.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// One of the four navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Previous,
    Next,
    Last,
}

impl Navigation {
    /// The page this control asks for, before clamping.
    ///
    /// `First` → 1, `Previous` → current - 1, `Next` → current + 1,
    /// `Last` → `total_pages`.
    #[must_use]
    pub fn target(self, current_page: usize, total_pages: usize) -> i64 {
        let current = i64::try_from(current_page).unwrap_or(i64::MAX);
        match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => i64::try_from(total_pages).unwrap_or(i64::MAX),
        }
    }
}

/// 1-indexed item range shown on the current page.
///
/// `start` is 0 when there are no items; `end` is clipped to the item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageRange {
    #[must_use]
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let start = if total_items == 0 {
            0
        } else {
            current_page
                .saturating_sub(1)
                .saturating_mul(page_size)
                .saturating_add(1)
        };
        let end = current_page.saturating_mul(page_size).min(total_items);

        Self {
            start,
            end,
            total: total_items,
        }
    }

    /// `"Showing 11-20 of 27"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Showing {}-{} of {}", self.start, self.end, self.total)
    }
}

/// Which navigation controls do something from the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl NavControls {
    /// First/previous are live above page 1; next/last below the last page.
    #[must_use]
    pub const fn new(current_page: usize, total_pages: usize) -> Self {
        let can_go_back = current_page > 1;
        let can_go_forward = current_page < total_pages;
        Self {
            first: can_go_back,
            previous: can_go_back,
            next: can_go_forward,
            last: can_go_forward,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::First => self.first,
            Navigation::Previous => self.previous,
            Navigation::Next => self.next,
            Navigation::Last => self.last,
        }
    }
}

/// Smallest option strictly larger than `current`, or the largest option.
#[must_use]
pub fn larger_page_size(current: usize) -> usize {
    PAGE_SIZE_OPTIONS
        .iter()
        .copied()
        .find(|&size| size > current)
        .unwrap_or(PAGE_SIZE_OPTIONS[PAGE_SIZE_OPTIONS.len() - 1])
}

/// Largest option strictly smaller than `current`, or the smallest option.
#[must_use]
pub fn smaller_page_size(current: usize) -> usize {
    PAGE_SIZE_OPTIONS
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .unwrap_or(PAGE_SIZE_OPTIONS[0])
}

/// `"Page 2 of 3"`; an empty collection reads as page 1 of 1.
#[must_use]
pub fn page_label(current_page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", current_page, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_for_middle_and_last_pages() {
        let range = PageRange::new(2, 10, 27);
        assert_eq!((range.start, range.end), (11, 20));
        assert_eq!(range.label(), "Showing 11-20 of 27");

        let last = PageRange::new(3, 10, 27);
        assert_eq!((last.start, last.end), (21, 27));
    }

    #[test]
    fn range_for_empty_collection() {
        let range = PageRange::new(1, 25, 0);
        assert_eq!(range.label(), "Showing 0-0 of 0");
    }

    #[test]
    fn controls_at_edges() {
        let first_page = NavControls::new(1, 3);
        assert!(!first_page.first && !first_page.previous);
        assert!(first_page.next && first_page.last);

        let last_page = NavControls::new(3, 3);
        assert!(last_page.first && last_page.previous);
        assert!(!last_page.next && !last_page.last);

        let nothing = NavControls::new(1, 0);
        assert_eq!(
            nothing,
            NavControls { first: false, previous: false, next: false, last: false }
        );

        let past_end = NavControls::new(5, 3);
        assert!(!past_end.is_enabled(Navigation::Next));
        assert!(past_end.is_enabled(Navigation::Previous));
    }

    #[test]
    fn navigation_targets() {
        assert_eq!(Navigation::First.target(4, 9), 1);
        assert_eq!(Navigation::Previous.target(4, 9), 3);
        assert_eq!(Navigation::Next.target(4, 9), 5);
        assert_eq!(Navigation::Last.target(4, 9), 9);
        assert_eq!(Navigation::Previous.target(1, 9), 0);
    }

    #[test]
    fn page_size_cycling_saturates() {
        assert_eq!(larger_page_size(10), 25);
        assert_eq!(larger_page_size(25), 50);
        assert_eq!(larger_page_size(100), 100);
        assert_eq!(smaller_page_size(50), 25);
        assert_eq!(smaller_page_size(10), 10);
    }

    #[test]
    fn page_size_cycling_snaps_from_custom_sizes() {
        assert_eq!(larger_page_size(30), 50);
        assert_eq!(smaller_page_size(30), 25);
        assert_eq!(larger_page_size(500), 100);
        assert_eq!(smaller_page_size(3), 10);
    }

    #[test]
    fn page_label_never_says_zero_pages() {
        assert_eq!(page_label(1, 0), "Page 1 of 1");
        assert_eq!(page_label(2, 3), "Page 2 of 3");
    }
}
