//! Page state over an ordered, caller-owned collection.
//!
//! [`Pager`] holds the current page and page size and derives the page count and
//! the visible slice. It has exactly two ways to move: [`Pager::set_page`], which
//! clamps any integer into range, and [`Pager::set_page_size`], which always
//! returns to the first page. Nothing here can fail.
//!
//! # Example
//!
//! ```rust
//! use stockroom::pagination::Pager;
//!
//! let mut pager = Pager::new((0..27).collect::<Vec<_>>(), 10);
//! assert_eq!(pager.total_pages(), 3);
//!
//! pager.set_page(3);
//! assert_eq!(pager.paginated_data(), &[20, 21, 22, 23, 24, 25, 26]);
//!
//! pager.set_page(-5);
//! assert_eq!(pager.current_page(), 1);
//! ```

use super::display::Navigation;
use std::cell::Cell;
use std::sync::Arc;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Memoized visible range, valid for one `(revision, page, size)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    revision: u64,
    page: usize,
    page_size: usize,
    start: usize,
    end: usize,
}

/// Paging state over a shared, read-only sequence of `T`.
///
/// The items are held behind an [`Arc`] so a presenting view can hand the same
/// snapshot to the pager without copying; the pager never mutates them.
///
/// # Invariants
///
/// - `current_page() >= 1`
/// - `page_size() >= 1`
/// - `total_pages() == ceil(total_items() / page_size())`, `0` for no items
/// - `paginated_data()` is the contiguous range
///   `[(page - 1) * size, page * size)` clipped to the item count, and empty
///   when the current page lies past the last page
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Arc<[T]>,
    /// Bumped on every `set_items`; part of the memo key.
    revision: u64,
    current_page: usize,
    page_size: usize,
    window: Cell<Option<Window>>,
}

impl<T> Pager<T> {
    /// Creates a pager on page 1.
    ///
    /// A zero `initial_page_size` is raised to 1.
    #[must_use]
    pub fn new(items: impl Into<Arc<[T]>>, initial_page_size: usize) -> Self {
        Self {
            items: items.into(),
            revision: 0,
            current_page: 1,
            page_size: initial_page_size.max(1),
            window: Cell::new(None),
        }
    }

    /// Creates a pager with [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn with_default_page_size(items: impl Into<Arc<[T]>>) -> Self {
        Self::new(items, DEFAULT_PAGE_SIZE)
    }

    /// Creates a pager from a sequence that may be absent.
    ///
    /// `None` is treated as an empty sequence.
    #[must_use]
    pub fn from_optional(items: Option<Vec<T>>, initial_page_size: usize) -> Self {
        Self::new(items.unwrap_or_default(), initial_page_size)
    }

    /// Current 1-indexed page.
    ///
    /// Reads as `1` while there are no pages at all. After the items shrink
    /// this may exceed [`Self::total_pages`]; the slice is then empty until the
    /// caller navigates.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.total_pages() == 0 {
            1
        } else {
            self.current_page
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        let total_items = self.items.len();
        if total_items == 0 {
            0
        } else {
            ((total_items - 1) / self.page_size) + 1
        }
    }

    /// Items on the current page.
    #[must_use]
    pub fn paginated_data(&self) -> &[T] {
        let window = self.window();
        &self.items[window.start..window.end]
    }

    /// Absolute index of the first element of [`Self::paginated_data`].
    #[must_use]
    pub fn page_offset(&self) -> usize {
        self.window().start
    }

    /// The full backing sequence.
    #[must_use]
    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Moves to `page`, clamped to `[1, max(1, total_pages)]`.
    ///
    /// Any integer is accepted.
    pub fn set_page(&mut self, page: i64) {
        let last = self.total_pages().max(1);
        self.current_page = if page < 1 {
            1
        } else {
            usize::try_from(page).map_or(last, |page| page.min(last))
        };
    }

    /// Changes the page size and returns to page 1.
    ///
    /// A zero size is raised to 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Replaces the backing sequence, keeping the current page.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        self.items = items.into();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Applies a first/previous/next/last navigation.
    pub fn navigate(&mut self, navigation: Navigation) {
        let target = navigation.target(self.current_page(), self.total_pages());
        self.set_page(target);
    }

    fn window(&self) -> Window {
        if let Some(window) = self.window.get() {
            if window.revision == self.revision
                && window.page == self.current_page
                && window.page_size == self.page_size
            {
                return window;
            }
        }

        let window = self.compute_window();
        self.window.set(Some(window));
        window
    }

    fn compute_window(&self) -> Window {
        let total = self.items.len();
        let (start, end) = if self.current_page > self.total_pages() {
            (0, 0)
        } else {
            let start = (self.current_page - 1).saturating_mul(self.page_size);
            let end = self.current_page.saturating_mul(self.page_size).min(total);
            (start, end)
        };

        Window {
            revision: self.revision,
            page: self.current_page,
            page_size: self.page_size,
            start,
            end,
        }
    }
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for n in 0..60 {
            for size in 1..12 {
                let pager = Pager::new(numbers(n), size);
                let expected = (n + size - 1) / size;
                assert_eq!(pager.total_pages(), expected, "n={n} size={size}");
                assert_eq!(pager.total_pages() == 0, n == 0);
            }
        }
    }

    #[test]
    fn every_page_is_full_except_the_last() {
        let n = 53;
        let size = 10;
        let mut pager = Pager::new(numbers(n), size);
        let total = pager.total_pages();

        for page in 1..=total {
            pager.set_page(i64::try_from(page).unwrap());
            let expected = if page == total { n - (total - 1) * size } else { size };
            assert_eq!(pager.paginated_data().len(), expected, "page {page}");
        }
    }

    #[test]
    fn twenty_seven_items_by_ten() {
        let mut pager = Pager::new(numbers(27), 10);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.total_items(), 27);
        assert_eq!(pager.paginated_data(), &numbers(10)[..]);

        pager.set_page(3);
        assert_eq!(pager.paginated_data(), &(20..27).collect::<Vec<_>>()[..]);
        assert_eq!(pager.page_offset(), 20);
    }

    #[test]
    fn empty_items() {
        let mut pager: Pager<u8> = Pager::with_default_page_size(Vec::new());
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.paginated_data().is_empty());
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_size(), DEFAULT_PAGE_SIZE);

        pager.set_page(4);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn single_full_page_clamps_forward() {
        let mut pager = Pager::new(numbers(25), 25);
        assert_eq!(pager.total_pages(), 1);
        pager.set_page(2);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let mut pager = Pager::new(numbers(40), 10);

        pager.set_page(0);
        assert_eq!(pager.current_page(), 1);

        pager.set_page(-5);
        assert_eq!(pager.current_page(), 1);

        pager.set_page(i64::try_from(pager.total_pages()).unwrap() + 100);
        assert_eq!(pager.current_page(), 4);

        pager.set_page(i64::MAX);
        assert_eq!(pager.current_page(), 4);

        pager.set_page(i64::MIN);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn set_page_is_idempotent() {
        let mut pager = Pager::new(numbers(33), 7);
        pager.set_page(3);
        let first = pager.paginated_data().to_vec();
        pager.set_page(3);
        assert_eq!(pager.paginated_data(), &first[..]);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut pager = Pager::new(numbers(200), 10);
        pager.set_page(3);
        assert_eq!(pager.current_page(), 3);

        pager.set_page_size(50);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_size(), 50);
        assert_eq!(pager.total_pages(), 4);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let mut pager = Pager::new(numbers(3), 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 3);

        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn absent_items_become_empty() {
        let pager: Pager<String> = Pager::from_optional(None, 10);
        assert_eq!(pager.total_items(), 0);
        assert!(pager.paginated_data().is_empty());
    }

    #[test]
    fn replacing_items_keeps_the_current_page() {
        let mut pager = Pager::new(numbers(30), 10);
        pager.set_page(3);

        pager.set_items(numbers(100));
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.paginated_data(), &(20..30).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn shrinking_items_past_the_page_yields_an_empty_slice() {
        let mut pager = Pager::new(numbers(30), 10);
        pager.set_page(3);

        pager.set_items(numbers(12));
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.current_page(), 3);
        assert!(pager.paginated_data().is_empty());

        pager.set_page(3);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.paginated_data(), &[10, 11]);
    }

    #[test]
    fn memoized_window_follows_new_items() {
        let mut pager = Pager::new(vec![1, 2, 3], 2);
        assert_eq!(pager.paginated_data(), &[1, 2]);

        pager.set_items(vec![7, 8, 9]);
        assert_eq!(pager.paginated_data(), &[7, 8]);
    }

    #[test]
    fn navigation_maps_to_set_page() {
        let mut pager = Pager::new(numbers(45), 10);

        pager.navigate(Navigation::Last);
        assert_eq!(pager.current_page(), 5);

        pager.navigate(Navigation::Next);
        assert_eq!(pager.current_page(), 5);

        pager.navigate(Navigation::Previous);
        assert_eq!(pager.current_page(), 4);

        pager.navigate(Navigation::First);
        assert_eq!(pager.current_page(), 1);

        pager.navigate(Navigation::Previous);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn shared_items_are_not_copied() {
        let items: Arc<[u32]> = Arc::from(vec![1, 2, 3]);
        let pager = Pager::new(Arc::clone(&items), 2);
        assert!(Arc::ptr_eq(pager.items(), &items));
    }
}
