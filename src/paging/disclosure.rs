//! Progressive disclosure for the product list.
//!
//! Small collections stay lightweight: a "reveal more" control grows the
//! visible prefix in fixed steps. Once enough is shown of a large
//! collection, the list switches to fixed-size pages for good; the
//! transition never reverses for the lifetime of the view.

use crate::paging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureMode {
    Incremental,
    Paged,
}

/// Policy knobs for one progressively-disclosed list.
#[derive(Debug, Clone, Copy)]
pub struct DisclosurePolicy {
    /// How many more items each reveal shows.
    pub reveal_step: usize,
    /// Page size once the list is paged.
    pub page_size: usize,
    /// Shown count at which a large collection switches to paged mode.
    pub paged_threshold: usize,
}

impl Default for DisclosurePolicy {
    fn default() -> Self {
        Self {
            reveal_step: 4,
            page_size: 12,
            paged_threshold: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureState {
    pub mode: DisclosureMode,
    pub shown: usize,
    pub page_index: usize,
}

impl DisclosureState {
    pub fn initial(policy: &DisclosurePolicy, len: usize) -> Self {
        Self {
            mode: DisclosureMode::Incremental,
            shown: policy.reveal_step.min(len),
            page_index: 0,
        }
    }

    /// Grow the visible prefix by one step, switching permanently to
    /// paged mode once the threshold is crossed on a large collection.
    /// Inapplicable (a no-op) once paged.
    pub fn reveal_more(&mut self, policy: &DisclosurePolicy, len: usize) {
        if self.mode == DisclosureMode::Paged {
            return;
        }
        self.shown = (self.shown + policy.reveal_step).min(len);
        if self.shown >= policy.paged_threshold && len > policy.paged_threshold {
            self.mode = DisclosureMode::Paged;
            self.page_index = 0;
        }
    }

    /// Whether the "reveal more" control should be offered.
    pub fn can_reveal_more(&self, policy: &DisclosurePolicy, len: usize) -> bool {
        self.mode == DisclosureMode::Incremental
            && self.shown < len
            && self.shown < policy.paged_threshold
    }

    pub fn next_page(&mut self, policy: &DisclosurePolicy, len: usize) {
        if self.mode == DisclosureMode::Paged {
            let count = paging::page_count(len, policy.page_size);
            self.page_index = paging::clamp_index(self.page_index + 1, count);
        }
    }

    pub fn prev_page(&mut self, policy: &DisclosurePolicy, len: usize) {
        if self.mode == DisclosureMode::Paged {
            let count = paging::page_count(len, policy.page_size);
            self.page_index = paging::clamp_index(self.page_index.saturating_sub(1), count);
        }
    }

    pub fn page_count(&self, policy: &DisclosurePolicy, len: usize) -> usize {
        paging::page_count(len, policy.page_size)
    }

    /// The currently visible slice of the collection.
    pub fn visible<'a, T>(&self, policy: &DisclosurePolicy, items: &'a [T]) -> &'a [T] {
        match self.mode {
            DisclosureMode::Incremental => &items[..self.shown.min(items.len())],
            DisclosureMode::Paged => paging::window(items, policy.page_size, self.page_index).items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> DisclosurePolicy {
        DisclosurePolicy::default()
    }

    #[test]
    fn test_initial_shows_first_step() {
        let p = policy();
        assert_eq!(DisclosureState::initial(&p, 15).shown, 4);
        assert_eq!(DisclosureState::initial(&p, 2).shown, 2);
        assert_eq!(DisclosureState::initial(&p, 0).shown, 0);
    }

    #[test]
    fn test_large_collection_transitions_to_paged() {
        // 15 products: 4 → 8 → 12 crosses the threshold
        let p = policy();
        let mut state = DisclosureState::initial(&p, 15);
        assert_eq!(state.shown, 4);

        state.reveal_more(&p, 15);
        assert_eq!(state.shown, 8);
        assert_eq!(state.mode, DisclosureMode::Incremental);

        state.reveal_more(&p, 15);
        assert_eq!(state.shown, 12);
        assert_eq!(state.mode, DisclosureMode::Paged);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_count(&p, 15), 2);
    }

    #[test]
    fn test_paged_mode_never_reverts() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 15);
        state.reveal_more(&p, 15);
        state.reveal_more(&p, 15);
        assert_eq!(state.mode, DisclosureMode::Paged);

        state.reveal_more(&p, 15);
        state.next_page(&p, 15);
        state.prev_page(&p, 15);
        assert_eq!(state.mode, DisclosureMode::Paged);
    }

    #[test]
    fn test_small_collection_never_transitions() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 10);
        for _ in 0..5 {
            state.reveal_more(&p, 10);
        }
        assert_eq!(state.mode, DisclosureMode::Incremental);
        assert_eq!(state.shown, 10);
        // Everything shown: the control disappears
        assert!(!state.can_reveal_more(&p, 10));
    }

    #[test]
    fn test_exactly_threshold_never_transitions() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 12);
        for _ in 0..4 {
            state.reveal_more(&p, 12);
        }
        assert_eq!(state.mode, DisclosureMode::Incremental);
        assert_eq!(state.shown, 12);
    }

    #[test]
    fn test_shown_is_monotonic() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 30);
        let mut prev = state.shown;
        for _ in 0..10 {
            state.reveal_more(&p, 30);
            assert!(state.shown >= prev);
            prev = state.shown;
        }
    }

    #[test]
    fn test_page_navigation_clamps_at_bounds() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 15);
        state.reveal_more(&p, 15);
        state.reveal_more(&p, 15);
        assert_eq!(state.mode, DisclosureMode::Paged);

        state.prev_page(&p, 15);
        assert_eq!(state.page_index, 0);
        state.next_page(&p, 15);
        assert_eq!(state.page_index, 1);
        state.next_page(&p, 15);
        assert_eq!(state.page_index, 1);
    }

    #[test]
    fn test_visible_slices() {
        let p = policy();
        let items: Vec<u32> = (0..15).collect();
        let mut state = DisclosureState::initial(&p, items.len());
        assert_eq!(state.visible(&p, &items), &[0, 1, 2, 3]);

        state.reveal_more(&p, items.len());
        state.reveal_more(&p, items.len());
        assert_eq!(state.visible(&p, &items).len(), 12);

        state.next_page(&p, items.len());
        assert_eq!(state.visible(&p, &items), &[12, 13, 14]);
    }

    #[test]
    fn test_page_navigation_noop_while_incremental() {
        let p = policy();
        let mut state = DisclosureState::initial(&p, 15);
        state.next_page(&p, 15);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.mode, DisclosureMode::Incremental);
    }
}
