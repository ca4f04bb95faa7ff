//! Word templates
//!
//! A template is a word in which some positions are replaced by
//! [`WILDCARD`]. Words and templates are both plain symbol slices.

use super::{Symbol, SymbolSet, WILDCARD};

/// Count the distinct symbols of a word
///
/// An injective substitution preserves this count, which is why the
/// dictionary is bucketed by it.
///
/// # Examples
/// ```
/// use subst_solver::core::distinct_count;
///
/// assert_eq!(distinct_count(&[0, 1, 1, 2]), 3);
/// assert_eq!(distinct_count(&[]), 0);
/// ```
#[must_use]
pub fn distinct_count(word: &[Symbol]) -> usize {
    word.iter()
        .filter(|&&symbol| symbol != WILDCARD)
        .copied()
        .collect::<SymbolSet>()
        .len()
}

/// Check a template against a word of the same length
///
/// Every non-wildcard position of `template` must equal the corresponding
/// symbol of `word`.
#[must_use]
pub fn matches(template: &[Symbol], word: &[Symbol]) -> bool {
    template.len() == word.len()
        && template
            .iter()
            .zip(word)
            .all(|(&t, &w)| t == WILDCARD || t == w)
}

/// All `2^n` templates obtained by hiding a subset of the word's positions
///
/// Bit `i` of the mask selects position `i` as a wildcard. Only meant for
/// short words; the caller bounds the length.
pub fn wildcard_masks(word: &[Symbol]) -> impl Iterator<Item = Box<[Symbol]>> + '_ {
    debug_assert!(word.len() < 32, "mask expansion of a long word");
    (0u32..1 << word.len()).map(move |mask| {
        word.iter()
            .enumerate()
            .map(|(i, &symbol)| if mask & (1 << i) != 0 { WILDCARD } else { symbol })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    const W: Symbol = WILDCARD;

    #[test]
    fn distinct_count_repeats() {
        assert_eq!(distinct_count(&[4, 4, 4]), 1);
        assert_eq!(distinct_count(&[0, 1, 2, 3]), 4);
        assert_eq!(distinct_count(&[2, 0, 2, 0]), 2);
    }

    #[test]
    fn matches_respects_revealed_positions() {
        let word = [0, 1, 2];
        assert!(matches(&[0, 1, 2], &word));
        assert!(matches(&[W, 1, W], &word));
        assert!(matches(&[W, W, W], &word));
        assert!(!matches(&[1, W, W], &word));
        assert!(!matches(&[0, 1], &word));
    }

    #[test]
    fn mask_count_is_power_of_two() {
        assert_eq!(wildcard_masks(&[0, 1, 2]).count(), 8);
        assert_eq!(wildcard_masks(&[5]).count(), 2);
        assert_eq!(wildcard_masks(&[]).count(), 1);
    }

    #[test]
    fn masks_match_on_the_fly_subsets() {
        // Every subset of positions, computed independently, must appear
        // among the precomputed masks and nothing else may.
        let word: Vec<Symbol> = vec![3, 1, 3, 0, 2];
        let precomputed: FxHashSet<Box<[Symbol]>> = wildcard_masks(&word).collect();

        let mut on_the_fly: FxHashSet<Box<[Symbol]>> = FxHashSet::default();
        for hidden in 0..=word.len() {
            for positions in combinations(word.len(), hidden) {
                let mut template = word.clone();
                for pos in positions {
                    template[pos] = W;
                }
                on_the_fly.insert(template.into_boxed_slice());
            }
        }

        assert_eq!(precomputed, on_the_fly);
        assert!(precomputed.iter().all(|template| matches(template, &word)));
    }

    fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
        if k == 0 {
            return vec![vec![]];
        }
        if n < k {
            return vec![];
        }
        let mut result = combinations(n - 1, k);
        for mut combo in combinations(n - 1, k - 1) {
            combo.push(n - 1);
            result.push(combo);
        }
        result
    }
}
