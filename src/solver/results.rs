//! Search results

use crate::core::Key;
use rustc_hash::FxHashMap;
use std::fmt;

/// Complete keys found by a search, mapped to their badness score
pub type FoundKeys = FxHashMap<Key, usize>;

/// Which phase produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Caesar and reversed-alphabet rotations
    Quick,
    /// Backtracking with forward checking
    Constraint,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quick => write!(f, "rotation"),
            Self::Constraint => write!(f, "constraint search"),
        }
    }
}

/// Counters collected during the constraint search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search tree nodes visited
    pub nodes: usize,
    /// Partial keys scored by forward checking
    pub probes: usize,
    /// Symbols removed from domains by forward checking
    pub pruned: usize,
    /// Complete keys recorded
    pub leaves: usize,
    /// Branches abandoned because a domain was empty
    pub exhausted: usize,
    /// Whether the leaf cap stopped the search early
    pub capped: bool,
}

/// Outcome of [`KeyFinder::find_with_report`](super::KeyFinder::find_with_report)
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub keys: FoundKeys,
    pub phase: Phase,
    pub stats: SearchStats,
}

/// Pick the key with the lowest score
///
/// Ties go to the smallest key so the choice does not depend on map order.
#[must_use]
pub fn best_key(keys: &FoundKeys) -> Option<(&Key, usize)> {
    keys.iter()
        .min_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(key, &score)| (key, score))
}

/// All keys ordered by score, then by key
#[must_use]
pub fn ranked(keys: &FoundKeys) -> Vec<(Key, usize)> {
    let mut ranked: Vec<(Key, usize)> = keys.iter().map(|(k, &s)| (k.clone(), s)).collect();
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> FoundKeys {
        let mut keys = FoundKeys::default();
        keys.insert(Key::rotation(4, 1), 3);
        keys.insert(Key::rotation(4, 2), 1);
        keys.insert(Key::rotation(4, 0), 1);
        keys
    }

    #[test]
    fn best_key_prefers_low_score_then_order() {
        let keys = keys();
        let (key, score) = best_key(&keys).unwrap();
        assert_eq!(score, 1);
        assert_eq!(key, &Key::rotation(4, 0));
    }

    #[test]
    fn best_key_of_empty_is_none() {
        assert!(best_key(&FoundKeys::default()).is_none());
    }

    #[test]
    fn ranked_orders_all_keys() {
        let ranked = ranked(&keys());
        let scores: Vec<usize> = ranked.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![1, 1, 3]);
        assert_eq!(ranked[0].0, Key::rotation(4, 0));
    }
}
