//! Recommendation selection.
//!
//! The home section shows a bounded "recommended" set per kind. Curated
//! (pinned) items win: any pinned item suppresses randomness for that
//! kind entirely. With no curation at all, an unbiased Fisher–Yates
//! shuffle picks a bounded random sample instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ContentItem;

/// Pluggable randomness so selection is exact under test and
/// non-deterministic in production.
pub trait RandomSource {
    /// Uniform index in `0..bound`. Callers guarantee `bound >= 1`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Thread-local RNG for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic RNG for tests.
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// In-place Fisher–Yates shuffle. Every permutation is equally likely
/// given a uniform source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    if items.len() < 2 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1);
        items.swap(i, j);
    }
}

/// Bounded recommended subset for one kind.
///
/// Pinned published items, in the collection's incoming order, truncated
/// to `cap_pinned` even if upstream erroneously over-pins. Only when no
/// pinned item exists at all does the selection fall back to a shuffled
/// prefix of `cap_fallback` items; the two strategies are never mixed.
pub fn select(
    items: &[ContentItem],
    cap_pinned: usize,
    cap_fallback: usize,
    rng: &mut dyn RandomSource,
) -> Vec<ContentItem> {
    let pinned: Vec<ContentItem> = items
        .iter()
        .filter(|i| i.pinned && i.published)
        .take(cap_pinned)
        .cloned()
        .collect();

    if !pinned.is_empty() {
        return pinned;
    }

    let mut pool: Vec<ContentItem> = items.to_vec();
    shuffle(&mut pool, rng);
    pool.truncate(cap_fallback);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, pinned: bool) -> ContentItem {
        ContentItem {
            id: id.into(),
            title: id.into(),
            pinned,
            ..Default::default()
        }
    }

    #[test]
    fn test_pinned_take_priority_in_stable_order() {
        let items = vec![
            item("a", false),
            item("b", true),
            item("c", true),
            item("d", false),
        ];
        let mut rng = SeededRandom::new(1);
        let picked = select(&items, 3, 3, &mut rng);
        let ids: Vec<&str> = picked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_cap_enforced_against_overpinned_upstream() {
        let items: Vec<ContentItem> = (0..10).map(|i| item(&format!("p{}", i), true)).collect();
        let mut rng = SeededRandom::new(1);
        let picked = select(&items, 2, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].id, "p0");
        assert_eq!(picked[1].id, "p1");
    }

    #[test]
    fn test_unpublished_pinned_items_excluded() {
        let mut hidden = item("hidden", true);
        hidden.published = false;
        let items = vec![hidden, item("visible", true)];
        let mut rng = SeededRandom::new(1);
        let picked = select(&items, 3, 3, &mut rng);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "visible");
    }

    #[test]
    fn test_no_pinned_falls_back_to_random_sample() {
        let items: Vec<ContentItem> = (0..5).map(|i| item(&format!("p{}", i), false)).collect();
        let mut rng = SeededRandom::new(7);
        let picked = select(&items, 3, 3, &mut rng);

        assert_eq!(picked.len(), 3);
        // All distinct
        let mut ids: Vec<&str> = picked.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_pinned_never_mixed_with_random() {
        let items = vec![item("a", false), item("b", true), item("c", false)];
        let mut rng = SeededRandom::new(3);
        let picked = select(&items, 3, 3, &mut rng);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "b");
    }

    #[test]
    fn test_fallback_capped_by_collection_size() {
        let items = vec![item("only", false)];
        let mut rng = SeededRandom::new(3);
        let picked = select(&items, 2, 2, &mut rng);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_shuffle_deterministic_under_seed() {
        let mut a: Vec<u32> = (0..10).collect();
        let mut b: Vec<u32> = (0..10).collect();
        shuffle(&mut a, &mut SeededRandom::new(42));
        shuffle(&mut b, &mut SeededRandom::new(42));
        assert_eq!(a, b);

        let mut c: Vec<u32> = (0..10).collect();
        shuffle(&mut c, &mut SeededRandom::new(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut v: Vec<u32> = (0..20).collect();
        shuffle(&mut v, &mut SeededRandom::new(9));
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_fallback_selection_statistically_uniform() {
        // 5 items, sample of 3, 2000 trials: each item should land in the
        // prefix about 1200 times. A generous band still catches a biased
        // shuffle (e.g. always-first-three would hit 0 or 2000).
        let items: Vec<ContentItem> = (0..5).map(|i| item(&format!("p{}", i), false)).collect();
        let mut rng = SeededRandom::new(1234);
        let mut counts = std::collections::HashMap::new();

        let trials = 2000;
        for _ in 0..trials {
            for picked in select(&items, 3, 3, &mut rng) {
                *counts.entry(picked.id.clone()).or_insert(0u32) += 1;
            }
        }

        assert_eq!(counts.len(), 5);
        let expected = trials * 3 / 5;
        for (id, count) in counts {
            assert!(
                (count as i64 - expected as i64).abs() < 150,
                "item {} selected {} times, expected about {}",
                id,
                count,
                expected
            );
        }
    }
}
