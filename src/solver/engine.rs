//! Key finder
//!
//! Owns the dictionary and the ciphertext words and drives the two search
//! phases: rotation keys first, the constraint search only if no rotation
//! is acceptable.

use super::quick::acceptable_rotations;
use super::scoring::{self, CipherWord};
use super::search::ConstraintSearch;
use super::{FoundKeys, Phase, SearchConfig, SearchReport, SearchStats};
use crate::core::{Alphabet, AlphabetError, Key};
use crate::wordlists::WordList;

/// Substitution key search engine
pub struct KeyFinder {
    word_list: WordList,
    words: Vec<CipherWord>,
    threshold: usize,
    config: SearchConfig,
}

impl KeyFinder {
    /// Create a finder for a list of ciphertext words
    ///
    /// The words should already be lower-cased, limited to the dictionary's
    /// alphabet and, for speed, at most
    /// [`MAX_WORD_LENGTH_TO_CACHE`](crate::wordlists::MAX_WORD_LENGTH_TO_CACHE)
    /// symbols long.
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` if a word uses a symbol outside
    /// the word list's alphabet.
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::Alphabet;
    /// use subst_solver::solver::{KeyFinder, SearchConfig};
    /// use subst_solver::wordlists::WordList;
    ///
    /// let alphabet = Alphabet::new("abcde").unwrap();
    /// let words = WordList::from_words(alphabet, ["abc", "bcd"]);
    /// let finder = KeyFinder::new(words, &["bcd"], SearchConfig::default()).unwrap();
    ///
    /// let keys = finder.find();
    /// let key = finder.alphabet().parse_key("eabcd").unwrap();
    /// assert_eq!(keys.get(&key), Some(&0));
    /// ```
    pub fn new<S: AsRef<str>>(
        word_list: WordList,
        cipher_words: &[S],
        config: SearchConfig,
    ) -> Result<Self, AlphabetError> {
        let words = cipher_words
            .iter()
            .map(|word| CipherWord::new(word_list.alphabet(), word.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let threshold = config.threshold(words.len());

        log::debug!(
            "Key finder over {} words, at most {threshold} bad words allowed",
            words.len()
        );

        Ok(Self {
            word_list,
            words,
            threshold,
            config,
        })
    }

    /// Maximum number of bad words for an acceptable key
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.word_list.alphabet()
    }

    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of ciphertext words that match nothing under `key`
    ///
    /// # Panics
    /// Panics if the key is shorter than the alphabet.
    #[must_use]
    pub fn score(&self, key: &Key) -> usize {
        scoring::count_bad_words(&self.word_list, &self.words, key)
    }

    /// Whether the score of `key` is above `limit`, stopping early
    #[must_use]
    pub fn exceeds(&self, key: &Key, limit: usize) -> bool {
        scoring::exceeds(&self.word_list, &self.words, key, limit)
    }

    /// Indices of the ciphertext words that match nothing under `key`
    #[must_use]
    pub fn bad_words(&self, key: &Key) -> Vec<usize> {
        scoring::bad_word_indices(&self.word_list, &self.words, key)
    }

    /// Rendered ciphertext word by index
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn word(&self, index: usize) -> String {
        self.alphabet().render(self.words[index].symbols())
    }

    /// Rotation keys scoring within the threshold
    #[must_use]
    pub fn quick_keys(&self) -> FoundKeys {
        acceptable_rotations(self)
    }

    /// Run the constraint search regardless of rotation keys
    #[must_use]
    pub fn constraint_search(&self) -> (FoundKeys, SearchStats) {
        ConstraintSearch::new(self).run()
    }

    /// Find candidate keys with their badness scores
    ///
    /// An empty map means no key was found.
    #[must_use]
    pub fn find(&self) -> FoundKeys {
        self.find_with_report().keys
    }

    /// Find candidate keys and report how they were found
    #[must_use]
    pub fn find_with_report(&self) -> SearchReport {
        let quick = self.quick_keys();
        if !quick.is_empty() {
            log::info!("Found {} acceptable rotation keys", quick.len());
            return SearchReport {
                keys: quick,
                phase: Phase::Quick,
                stats: SearchStats::default(),
            };
        }

        log::info!("Not a Caesar or Atbash cipher, trying general substitution");
        let (keys, stats) = self.constraint_search();
        log::info!(
            "Constraint search finished: {} keys, {} nodes, {} probes",
            keys.len(),
            stats.nodes,
            stats.probes
        );

        SearchReport {
            keys,
            phase: Phase::Constraint,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::best_key;

    fn encrypt(alphabet: &Alphabet, encryption: &Key, words: &[&str]) -> Vec<String> {
        words
            .iter()
            .map(|w| alphabet.substitute(w, encryption))
            .collect()
    }

    #[test]
    fn shifted_word_is_recovered() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc", "bcd"]);
        let finder = KeyFinder::new(list, &["bcd"], SearchConfig::default()).unwrap();

        let report = finder.find_with_report();
        let expected = finder.alphabet().parse_key("eabcd").unwrap();

        assert_eq!(report.phase, Phase::Quick);
        assert_eq!(report.keys.get(&expected), Some(&0));
        // The identity also reads "bcd" as a dictionary word
        assert_eq!(report.keys.len(), 2);
    }

    #[test]
    fn caesar_cipher_solved_by_rotations_alone() {
        let alphabet = Alphabet::new("abcdefgh").unwrap();
        let dictionary = [
            "bad", "cafe", "head", "hedge", "badge", "each", "beach", "chef", "gab",
        ];
        let plaintext = ["bad", "head", "beach", "chef", "gab", "hedge"];

        let encryption = Key::rotation(8, 3);
        let cipher = encrypt(&alphabet, &encryption, &plaintext);
        assert_eq!(cipher[0], "edg");

        let list = WordList::from_words(alphabet, dictionary);
        let finder = KeyFinder::new(list, &cipher, SearchConfig::default()).unwrap();
        let report = finder.find_with_report();

        let decryption = encryption.inverse().unwrap();
        assert_eq!(finder.alphabet().render_key(&decryption), "fghabcde");
        assert_eq!(report.phase, Phase::Quick);
        assert_eq!(report.stats, SearchStats::default());
        assert_eq!(report.keys.len(), 1);
        assert_eq!(report.keys.get(&decryption), Some(&0));
    }

    #[test]
    fn general_substitution_needs_constraint_search() {
        let alphabet = Alphabet::new("abcdef").unwrap();
        let dictionary = [
            "bad", "cafe", "face", "fed", "cab", "dead", "bee", "added", "faced", "decaf",
            "beef", "deaf", "fade", "bed",
        ];
        let plaintext = ["bad", "face", "fed", "cab", "beef", "decaf", "added"];

        let encryption = alphabet.parse_key("dfaecb").unwrap();
        let cipher = encrypt(&alphabet, &encryption, &plaintext);

        let list = WordList::from_words(alphabet, dictionary);
        let finder = KeyFinder::new(list, &cipher, SearchConfig::default()).unwrap();

        assert!(finder.quick_keys().is_empty());

        let report = finder.find_with_report();
        assert_eq!(report.phase, Phase::Constraint);
        assert!(report.stats.nodes > 0);

        let (best, score) = best_key(&report.keys).unwrap();
        assert_eq!(best, &encryption.inverse().unwrap());
        assert_eq!(finder.alphabet().render_key(best), "cfeadb");
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_input_accepts_every_rotation() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc"]);
        let finder = KeyFinder::new(list, &[] as &[&str], SearchConfig::default()).unwrap();

        assert_eq!(finder.threshold(), 0);

        let report = finder.find_with_report();
        assert_eq!(report.phase, Phase::Quick);
        assert_eq!(report.keys.len(), 10);
        assert!(report.keys.values().all(|&score| score == 0));
    }

    #[test]
    fn unsolvable_input_returns_empty() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc"]);
        let finder = KeyFinder::new(list, &["aab"], SearchConfig::default()).unwrap();

        let report = finder.find_with_report();
        assert_eq!(report.phase, Phase::Constraint);
        assert!(report.keys.is_empty());
        assert!(best_key(&report.keys).is_none());
    }

    #[test]
    fn foreign_symbols_are_rejected() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc"]);
        let result = KeyFinder::new(list, &["abz"], SearchConfig::default());
        assert!(matches!(result, Err(AlphabetError::UnknownSymbol('z'))));
    }

    #[test]
    fn bad_words_lists_failures() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc", "bcd"]);
        let finder = KeyFinder::new(list, &["bcd", "ace", "abc"], SearchConfig::default()).unwrap();

        let identity = Key::rotation(5, 0);
        assert_eq!(finder.bad_words(&identity), vec![1]);
        assert_eq!(finder.word(1), "ace");
        assert_eq!(finder.score(&identity), 1);
        assert!(!finder.exceeds(&identity, 1));
        assert!(finder.exceeds(&identity, 0));
    }

    #[test]
    fn threshold_follows_config() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let list = WordList::from_words(alphabet, ["abc"]);
        let words = vec!["abc"; 40];
        let config = SearchConfig::default().with_max_bad_words_rate(0.1);
        let finder = KeyFinder::new(list, &words, config).unwrap();

        assert_eq!(finder.word_count(), 40);
        assert_eq!(finder.threshold(), 4);
    }
}
