//! Constraint search over alphabet permutations
//!
//! Backtracking with forward checking. Every node owns its key and domain
//! table; children receive modified copies, so sibling branches never see
//! each other's state and branches can run on separate rayon workers.

use super::results::SearchStats;
use super::{FoundKeys, KeyFinder};
use crate::core::{Key, Symbol, SymbolSet};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Candidate plaintext symbols for every ciphertext position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    sets: Vec<SymbolSet>,
}

impl Domains {
    /// Every symbol allowed at every position
    #[must_use]
    pub fn full(len: usize) -> Self {
        Self {
            sets: vec![SymbolSet::full(len); len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// # Panics
    /// Panics if `pos` is out of range.
    #[must_use]
    pub fn get(&self, pos: usize) -> SymbolSet {
        self.sets[pos]
    }

    /// # Panics
    /// Panics if `pos` is out of range.
    pub fn set(&mut self, pos: usize, set: SymbolSet) {
        self.sets[pos] = set;
    }

    /// Fix `symbol` at `pos` and remove it from every other position
    ///
    /// # Panics
    /// Panics if `pos` is out of range.
    pub fn assign(&mut self, pos: usize, symbol: Symbol) {
        for set in &mut self.sets {
            set.remove(symbol);
        }
        self.sets[pos] = SymbolSet::single(symbol);
    }
}

#[derive(Default)]
struct Counters {
    nodes: AtomicUsize,
    probes: AtomicUsize,
    pruned: AtomicUsize,
    leaves: AtomicUsize,
    exhausted: AtomicUsize,
    capped: AtomicBool,
}

/// One run of the constraint search
pub(crate) struct ConstraintSearch<'a> {
    finder: &'a KeyFinder,
    threshold: usize,
    max_leaves: Option<usize>,
    counters: Counters,
}

impl<'a> ConstraintSearch<'a> {
    pub(crate) fn new(finder: &'a KeyFinder) -> Self {
        Self {
            finder,
            threshold: finder.threshold(),
            max_leaves: finder.config().max_leaves,
            counters: Counters::default(),
        }
    }

    /// Explore from the fully unknown key
    pub(crate) fn run(self) -> (FoundKeys, SearchStats) {
        let len = self.finder.alphabet().len();
        let keys = self.branch(Key::unknown(len), Domains::full(len), 1);

        if self.counters.capped.load(Ordering::Relaxed) {
            log::warn!(
                "Leaf limit of {} reached, search stopped early",
                self.max_leaves.unwrap_or_default()
            );
        }

        (keys, self.stats())
    }

    fn stats(&self) -> SearchStats {
        let c = &self.counters;
        SearchStats {
            nodes: c.nodes.load(Ordering::Relaxed),
            probes: c.probes.load(Ordering::Relaxed),
            pruned: c.pruned.load(Ordering::Relaxed),
            leaves: c.leaves.load(Ordering::Relaxed),
            exhausted: c.exhausted.load(Ordering::Relaxed),
            capped: c.capped.load(Ordering::Relaxed),
        }
    }

    fn branch(&self, key: Key, domains: Domains, level: usize) -> FoundKeys {
        if self.counters.capped.load(Ordering::Relaxed) {
            return FoundKeys::default();
        }
        self.counters.nodes.fetch_add(1, Ordering::Relaxed);
        log::trace!(
            "Level: {level:3}, key: {}",
            self.finder.alphabet().render_key(&key)
        );

        if key.is_complete() {
            return self.record_leaf(key);
        }

        let Some((domains, next)) = self.forward_check(&key, domains) else {
            return FoundKeys::default();
        };

        let candidates: Vec<Symbol> = domains.get(next).iter().collect();
        candidates
            .into_par_iter()
            .map(|symbol| {
                let mut child = domains.clone();
                child.assign(next, symbol);
                self.branch(key.with(next, symbol), child, level + 1)
            })
            .reduce(FoundKeys::default, |mut acc, keys| {
                acc.extend(keys);
                acc
            })
    }

    fn record_leaf(&self, key: Key) -> FoundKeys {
        let admitted = self
            .counters
            .leaves
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| match self.max_leaves {
                Some(max) if n >= max => None,
                _ => Some(n + 1),
            })
            .is_ok();

        if !admitted {
            self.counters.capped.store(true, Ordering::Relaxed);
            return FoundKeys::default();
        }

        let score = self.finder.score(&key);
        log::debug!(
            "Found: {}, bad words: {score}",
            self.finder.alphabet().render_key(&key)
        );

        let mut keys = FoundKeys::default();
        keys.insert(key, score);
        keys
    }

    /// Prune every unknown position's domain against the threshold
    ///
    /// Returns the pruned domains and the unknown position with the fewest
    /// survivors (lowest index on ties), or `None` when some domain is empty
    /// and the branch cannot be completed.
    fn forward_check(&self, key: &Key, mut domains: Domains) -> Option<(Domains, usize)> {
        let unknown: Vec<usize> = key.unknown_positions().collect();

        // Emptied by the parent's assignment: nothing can be placed here
        if let Some(&pos) = unknown.iter().find(|&&pos| domains.get(pos).is_empty()) {
            self.counters.exhausted.fetch_add(1, Ordering::Relaxed);
            log::trace!("Position {pos} has no candidates left");
            return None;
        }

        let surviving: Vec<(usize, SymbolSet)> = unknown
            .par_iter()
            .map(|&pos| (pos, self.surviving(key, pos, domains.get(pos))))
            .collect();

        let mut next: Option<(usize, usize)> = None;
        for (pos, set) in surviving {
            let removed = domains.get(pos).len() - set.len();
            self.counters.pruned.fetch_add(removed, Ordering::Relaxed);

            if set.is_empty() {
                self.counters.exhausted.fetch_add(1, Ordering::Relaxed);
                log::trace!("Position {pos} pruned empty");
                return None;
            }

            domains.set(pos, set);
            if next.is_none_or(|(_, len)| set.len() < len) {
                next = Some((pos, set.len()));
            }
        }

        next.map(|(pos, _)| (domains, pos))
    }

    /// Symbols that keep the partial score within the threshold when placed
    /// alone at `pos`
    fn surviving(&self, key: &Key, pos: usize, candidates: SymbolSet) -> SymbolSet {
        candidates
            .iter()
            .filter(|&symbol| {
                self.counters.probes.fetch_add(1, Ordering::Relaxed);
                !self.finder.exceeds(&key.with(pos, symbol), self.threshold)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::SearchConfig;
    use crate::wordlists::WordList;

    const DICTIONARY: &[&str] = &[
        "bad", "cafe", "face", "fed", "cab", "dead", "bee", "added", "faced", "decaf", "beef",
        "deaf", "fade", "bed",
    ];

    /// Plaintext "bad face fed cab beef decaf added" under a non-rotation key
    const CIPHER: &[&str] = &["fde", "bdac", "bce", "adf", "fccb", "ecadb", "deece"];

    fn finder(config: SearchConfig) -> KeyFinder {
        let alphabet = Alphabet::new("abcdef").unwrap();
        let list = WordList::from_words(alphabet, DICTIONARY);
        KeyFinder::new(list, CIPHER, config).unwrap()
    }

    fn permutations(len: usize) -> Vec<Vec<Symbol>> {
        if len == 0 {
            return vec![vec![]];
        }
        let mut result = Vec::new();
        for perm in permutations(len - 1) {
            for i in 0..=perm.len() {
                let mut next = perm.clone();
                next.insert(i, (len - 1) as Symbol);
                result.push(next);
            }
        }
        result
    }

    #[test]
    fn domains_assign_keeps_bijection() {
        let mut domains = Domains::full(4);
        domains.assign(1, 2);

        assert_eq!(domains.get(1), SymbolSet::single(2));
        for pos in [0, 2, 3] {
            assert!(!domains.get(pos).contains(2));
            assert_eq!(domains.get(pos).len(), 3);
        }
    }

    #[test]
    fn domains_copies_are_independent() {
        let parent = Domains::full(3);
        let mut child = parent.clone();
        child.assign(0, 0);

        assert_eq!(parent, Domains::full(3));
        assert_ne!(parent, child);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn domains_out_of_range_panics() {
        let _ = Domains::full(3).get(3);
    }

    #[test]
    fn finds_the_substitution_key() {
        let finder = finder(SearchConfig::default());
        let (keys, stats) = ConstraintSearch::new(&finder).run();

        let expected = finder.alphabet().parse_key("cfeadb").unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.get(&expected), Some(&0));
        assert_eq!(stats.leaves, 1);
        assert!(stats.pruned > 0);
        assert!(!stats.capped);
    }

    #[test]
    fn recorded_keys_are_permutations() {
        // With every word allowed to fail nothing is pruned
        let finder = finder(SearchConfig::default().with_max_bad_words_rate(1.0));
        let (keys, _) = ConstraintSearch::new(&finder).run();

        assert_eq!(keys.len(), 720);
        for key in keys.keys() {
            assert!(key.is_complete());
            assert!(key.is_injective());
            assert_eq!(key.len(), 6);
        }
    }

    #[test]
    fn leaf_scores_are_exact() {
        let finder = finder(SearchConfig::default().with_max_bad_words_rate(1.0));
        let (keys, _) = ConstraintSearch::new(&finder).run();

        for (key, &score) in &keys {
            assert_eq!(finder.score(key), score);
        }
    }

    #[test]
    fn search_finds_every_acceptable_permutation() {
        for rate in [0.0, 0.2, 0.5] {
            let finder = finder(SearchConfig::default().with_max_bad_words_rate(rate));
            let (keys, _) = ConstraintSearch::new(&finder).run();

            for perm in permutations(6) {
                let key = Key::from_symbols(6, perm).unwrap();
                if finder.score(&key) <= finder.threshold() {
                    assert!(keys.contains_key(&key), "acceptable key missed at rate {rate}");
                }
            }
        }
    }

    #[test]
    fn pruned_symbols_never_lead_to_acceptable_keys() {
        let finder = finder(SearchConfig::default().with_max_bad_words_rate(0.2));
        let threshold = finder.threshold();
        let all: Vec<Key> = permutations(6)
            .into_iter()
            .map(|perm| Key::from_symbols(6, perm).unwrap())
            .collect();

        for pos in 0..6 {
            for symbol in 0..6 {
                let probe = Key::unknown(6).with(pos, symbol);
                if finder.score(&probe) <= threshold {
                    continue;
                }
                for key in all.iter().filter(|k| k.get(pos) == Some(symbol)) {
                    assert!(finder.score(key) > threshold);
                }
            }
        }
    }

    #[test]
    fn impossible_words_exhaust_the_search() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc"]);
        let finder = KeyFinder::new(list, &["aab"], SearchConfig::default()).unwrap();

        let (keys, stats) = ConstraintSearch::new(&finder).run();
        assert!(keys.is_empty());
        assert_eq!(stats.leaves, 0);
        assert!(stats.exhausted > 0);
    }

    #[test]
    fn leaf_cap_limits_recorded_keys() {
        let config = SearchConfig::default()
            .with_max_bad_words_rate(1.0)
            .with_max_leaves(Some(5));
        let finder = finder(config);
        let (keys, stats) = ConstraintSearch::new(&finder).run();

        assert_eq!(keys.len(), 5);
        assert_eq!(stats.leaves, 5);
        assert!(stats.capped);
    }
}
