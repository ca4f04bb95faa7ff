//! Dictionary index
//!
//! Answers "could this partially revealed word be a dictionary word?" for
//! the scoring loop. Words are bucketed by length and distinct-symbol count.
//! Short words are stored as every wildcard mask of themselves, so a query
//! is a single set lookup; long words are stored as-is and scanned.

pub mod loader;

use crate::core::{Alphabet, Symbol, distinct_count, matches, wildcard_masks};
use rustc_hash::{FxHashMap, FxHashSet};

/// Longest word whose wildcard masks are precomputed
pub const MAX_WORD_LENGTH_TO_CACHE: usize = 8;

/// Dictionary partition key
///
/// An injective substitution preserves both fields, so a ciphertext word can
/// only ever match dictionary words from its own bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub length: usize,
    pub distinct: usize,
}

impl BucketKey {
    #[must_use]
    pub fn of(word: &[Symbol]) -> Self {
        Self {
            length: word.len(),
            distinct: distinct_count(word),
        }
    }
}

#[derive(Debug, Clone)]
enum Bucket {
    /// Every wildcard mask of every short word
    Templates(FxHashSet<Box<[Symbol]>>),
    /// Literal long words
    Words(Vec<Box<[Symbol]>>),
}

/// Dictionary index over a fixed alphabet
#[derive(Debug, Clone)]
pub struct WordList {
    alphabet: Alphabet,
    buckets: FxHashMap<BucketKey, Bucket>,
    word_count: usize,
}

impl WordList {
    /// Create an empty word list
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            buckets: FxHashMap::default(),
            word_count: 0,
        }
    }

    /// Build a word list from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::Alphabet;
    /// use subst_solver::wordlists::WordList;
    ///
    /// let alphabet = Alphabet::new("abcde").unwrap();
    /// let words = WordList::from_words(alphabet, ["abc", "bcd"]);
    /// assert_eq!(words.word_count(), 2);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(alphabet: Alphabet, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(alphabet);
        list.extend(words);
        list
    }

    /// Add a word to the index
    ///
    /// The word is trimmed and lower-cased. Blank lines and words holding
    /// symbols outside the alphabet are skipped. Returns whether the word
    /// was indexed.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }

        let Ok(symbols) = self.alphabet.encode(&word) else {
            log::trace!("Skipping dictionary word outside the alphabet: {word}");
            return false;
        };

        let key = BucketKey::of(&symbols);
        if key.length > MAX_WORD_LENGTH_TO_CACHE {
            match self
                .buckets
                .entry(key)
                .or_insert_with(|| Bucket::Words(Vec::new()))
            {
                Bucket::Words(words) => words.push(symbols.into_boxed_slice()),
                Bucket::Templates(_) => unreachable!("long words never land in template buckets"),
            }
        } else {
            match self
                .buckets
                .entry(key)
                .or_insert_with(|| Bucket::Templates(FxHashSet::default()))
            {
                Bucket::Templates(templates) => templates.extend(wildcard_masks(&symbols)),
                Bucket::Words(_) => unreachable!("short words never land in word buckets"),
            }
        }

        self.word_count += 1;
        true
    }

    /// Add every word of an iterator, returning how many were indexed
    pub fn extend<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count()
    }

    /// Check whether some dictionary word fits a template
    ///
    /// The template uses [`WILDCARD`](crate::core::WILDCARD) for unrevealed
    /// positions. Only words of the same length and with `distinct_count`
    /// distinct symbols are considered.
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::{Alphabet, WILDCARD};
    /// use subst_solver::wordlists::WordList;
    ///
    /// let alphabet = Alphabet::new("abcde").unwrap();
    /// let words = WordList::from_words(alphabet, ["bead"]);
    ///
    /// assert!(words.find_word_by_template(&[1, WILDCARD, 0, WILDCARD], 4));
    /// assert!(!words.find_word_by_template(&[1, WILDCARD, 0, WILDCARD], 3));
    /// assert!(!words.find_word_by_template(&[2, WILDCARD, 0, WILDCARD], 4));
    /// ```
    #[must_use]
    pub fn find_word_by_template(&self, template: &[Symbol], distinct_count: usize) -> bool {
        let key = BucketKey {
            length: template.len(),
            distinct: distinct_count,
        };

        match self.buckets.get(&key) {
            None => false,
            Some(Bucket::Templates(templates)) => templates.contains(template),
            Some(Bucket::Words(words)) => words.iter().any(|word| matches(template, word)),
        }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of words indexed (duplicates included)
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Stored entries: masks for short buckets, words for long ones
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.buckets
            .values()
            .map(|bucket| match bucket {
                Bucket::Templates(templates) => templates.len(),
                Bucket::Words(words) => words.len(),
            })
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
