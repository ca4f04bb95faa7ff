//! Key scoring
//!
//! The badness of a key is the number of ciphertext words whose translation
//! matches no dictionary entry. Unknown key slots translate to wildcards, so
//! the same function scores partial keys.

use crate::core::{Alphabet, AlphabetError, Key, Symbol, distinct_count};
use crate::wordlists::{MAX_WORD_LENGTH_TO_CACHE, WordList};

/// A ciphertext word with its precomputed distinct-symbol count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherWord {
    symbols: Box<[Symbol]>,
    distinct: usize,
}

impl CipherWord {
    /// Encode a ciphertext word
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` if the word has a symbol
    /// outside the alphabet.
    pub fn new(alphabet: &Alphabet, word: &str) -> Result<Self, AlphabetError> {
        let symbols = alphabet.encode(word)?;
        let distinct = distinct_count(&symbols);
        Ok(Self {
            symbols: symbols.into_boxed_slice(),
            distinct,
        })
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.distinct
    }
}

/// Iterate the words that fail to match under `key`, with their index
fn failing_words<'a>(
    word_list: &'a WordList,
    words: &'a [CipherWord],
    key: &'a Key,
) -> impl Iterator<Item = usize> + 'a {
    let mut buffer = Vec::with_capacity(MAX_WORD_LENGTH_TO_CACHE);
    words.iter().enumerate().filter_map(move |(i, word)| {
        key.translate(word.symbols(), &mut buffer);
        (!word_list.find_word_by_template(&buffer, word.distinct())).then_some(i)
    })
}

/// Count bad words under `key`
#[must_use]
pub fn count_bad_words(word_list: &WordList, words: &[CipherWord], key: &Key) -> usize {
    failing_words(word_list, words, key).count()
}

/// Check whether the badness of `key` is above `limit`
///
/// Stops at the first bad word past the limit; used by forward checking,
/// which only needs the comparison.
#[must_use]
pub fn exceeds(word_list: &WordList, words: &[CipherWord], key: &Key, limit: usize) -> bool {
    failing_words(word_list, words, key).nth(limit).is_some()
}

/// Indices of the bad words under `key`
#[must_use]
pub fn bad_word_indices(word_list: &WordList, words: &[CipherWord], key: &Key) -> Vec<usize> {
    failing_words(word_list, words, key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (WordList, Vec<CipherWord>) {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet.clone(), ["abc", "bcd", "bad"]);
        let words = ["bcd", "cde", "aab"]
            .iter()
            .map(|w| CipherWord::new(&alphabet, w).unwrap())
            .collect();
        (list, words)
    }

    #[test]
    fn cipher_word_distinct_count() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let word = CipherWord::new(&alphabet, "added").unwrap();
        assert_eq!(word.distinct(), 3);
        assert_eq!(word.symbols().len(), 5);
        assert!(CipherWord::new(&alphabet, "xyz").is_err());
    }

    #[test]
    fn identity_key_scores_dictionary_hits() {
        let (list, words) = setup();
        let key = Key::rotation(5, 0);
        // "bcd" hits, "cde" and "aab" miss
        assert_eq!(count_bad_words(&list, &words, &key), 2);
        assert_eq!(bad_word_indices(&list, &words, &key), vec![1, 2]);
    }

    #[test]
    fn unknown_key_only_fails_on_missing_buckets() {
        let (list, words) = setup();
        let key = Key::unknown(5);
        // "aab" has distinct count 2, no dictionary bucket for (3, 2)
        assert_eq!(count_bad_words(&list, &words, &key), 1);
    }

    #[test]
    fn exceeds_agrees_with_count() {
        let (list, words) = setup();
        for shift in 0..5 {
            let key = Key::rotation(5, shift);
            let score = count_bad_words(&list, &words, &key);
            for limit in 0..4 {
                assert_eq!(exceeds(&list, &words, &key, limit), score > limit);
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let (list, words) = setup();
        let key = Key::from_symbols(5, vec![4, 0, 1, 2, 3]).unwrap();
        let first = count_bad_words(&list, &words, &key);
        for _ in 0..10 {
            assert_eq!(count_bad_words(&list, &words, &key), first);
        }
    }
}
