//! Rotation keys
//!
//! Most hand-made ciphers are plain shifts of the alphabet or of its
//! reversal. Scoring those `2L` keys first avoids the general search in the
//! common case.

use super::{FoundKeys, KeyFinder};
use crate::core::Key;
use rayon::prelude::*;

/// Every rotation of the alphabet and of the reversed alphabet
pub fn rotation_keys(len: usize) -> impl Iterator<Item = Key> {
    (0..len).flat_map(move |shift| [Key::rotation(len, shift), Key::reversed_rotation(len, shift)])
}

/// Score all rotation keys, keeping those within the threshold
pub(crate) fn acceptable_rotations(finder: &KeyFinder) -> FoundKeys {
    let threshold = finder.threshold();
    let candidates: Vec<Key> = rotation_keys(finder.alphabet().len()).collect();

    candidates
        .into_par_iter()
        .filter_map(|key| {
            let score = finder.score(&key);
            log::trace!("Rotation {}: {score} bad words", finder.alphabet().render_key(&key));
            (score <= threshold).then_some((key, score))
        })
        .collect()
}
