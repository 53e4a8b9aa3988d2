//! Stateless pagination over an ordered collection.
//!
//! `window` only slices; keeping the displayed index in bounds is the
//! caller's job via `clamp_index`, so navigating past either end is a
//! visible no-op rather than a silent correction.

pub mod disclosure;

pub use disclosure::{DisclosureMode, DisclosurePolicy, DisclosureState};

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

/// `ceil(len / page_size)`; zero for an empty collection.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Clamp a page index into `[0, max(page_count - 1, 0)]`. Idempotent.
pub fn clamp_index(page_index: usize, page_count: usize) -> usize {
    page_index.min(page_count.saturating_sub(1))
}

/// The page at `page_index`, given a caller-clamped index.
pub fn window<T>(items: &[T], page_size: usize, page_index: usize) -> PageWindow<'_, T> {
    let count = page_count(items.len(), page_size);
    let start = (page_index * page_size).min(items.len());
    let end = ((page_index + 1) * page_size).min(items.len());

    PageWindow {
        items: &items[start..end],
        page_index,
        page_count: count,
        page_size,
    }
}
