//! Client-side pagination.
//!
//! [`Pager`] owns page state over an in-memory ordered collection and produces
//! the visible slice; [`display`] turns that state into labels and control
//! states for the pagination bar.
//!
//! # Modules
//!
//! - [`pager`]: Page state, clamped navigation, memoized slicing
//! - [`display`]: Range label, navigation controls, page-size options
//!
//! # Example
//!
//! ```rust
//! use stockroom::pagination::{NavControls, Navigation, PageRange, Pager};
//!
//! let mut pager = Pager::new((1..=27).collect::<Vec<u32>>(), 10);
//! pager.navigate(Navigation::Next);
//!
//! let range = PageRange::new(pager.current_page(), pager.page_size(), pager.total_items());
//! assert_eq!(range.label(), "Showing 11-20 of 27");
//!
//! let controls = NavControls::new(pager.current_page(), pager.total_pages());
//! assert!(controls.previous && controls.next);
//! ```

pub mod display;
pub mod pager;

pub use display::{
    larger_page_size, page_label, smaller_page_size, NavControls, Navigation, PageRange,
    PAGE_SIZE_OPTIONS,
};
pub use pager::{Pager, DEFAULT_PAGE_SIZE};
