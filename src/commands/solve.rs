//! Ciphertext solving command
//!
//! Tokenizes the ciphertext, searches for keys and decrypts the text with
//! the best one.

use crate::core::Alphabet;
use crate::solver::{KeyFinder, Phase, SearchConfig, SearchStats, best_key, ranked};
use crate::wordlists::{MAX_WORD_LENGTH_TO_CACHE, WordList};

/// Default cap on the number of ciphertext words fed to the search
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Configuration for solving a ciphertext
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub max_words: usize,
    pub max_word_length: usize,
    pub search: SearchConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_word_length: MAX_WORD_LENGTH_TO_CACHE,
            search: SearchConfig::default(),
        }
    }
}

/// A key found by the search, rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateKey {
    pub key: String,
    pub bad_words: usize,
}

/// Result of solving a ciphertext
pub struct SolveResult {
    pub word_count: usize,
    pub threshold: usize,
    pub phase: Phase,
    pub stats: SearchStats,
    /// All keys found, best first
    pub candidates: Vec<CandidateKey>,
    pub best: Option<CandidateKey>,
    pub decrypted: Option<String>,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.best.is_some()
    }
}

/// Split text into candidate ciphertext words
///
/// Tokens are runs of alphabet symbols and apostrophes in the lower-cased
/// text. Tokens holding an apostrophe or longer than `max_len` are dropped;
/// at most `max_words` tokens are kept, in order.
///
/// # Examples
/// ```
/// use subst_solver::commands::extract_cipher_words;
/// use subst_solver::core::Alphabet;
///
/// let alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyz").unwrap();
/// let words = extract_cipher_words("Don't PANIC, it's fine.", &alphabet, 8, 200);
/// assert_eq!(words, vec!["panic", "fine"]);
/// ```
#[must_use]
pub fn extract_cipher_words(
    text: &str,
    alphabet: &Alphabet,
    max_len: usize,
    max_words: usize,
) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(alphabet.contains(c) || c == '\''))
        .filter(|token| !token.is_empty() && !token.contains('\''))
        .filter(|token| token.chars().count() <= max_len)
        .take(max_words)
        .map(str::to_string)
        .collect()
}

/// Solve a ciphertext against a word list
///
/// # Errors
///
/// Returns an error if the ciphertext yields no usable words.
pub fn solve_text(
    text: &str,
    word_list: WordList,
    config: &SolveConfig,
) -> Result<SolveResult, String> {
    let alphabet = word_list.alphabet().clone();
    let words = extract_cipher_words(text, &alphabet, config.max_word_length, config.max_words);

    if words.is_empty() {
        return Err("Ciphertext contains no words in the selected alphabet".to_string());
    }
    log::info!("Loaded {} ciphertext words", words.len());

    let finder = KeyFinder::new(word_list, &words, config.search)
        .map_err(|e| format!("Invalid ciphertext word: {e}"))?;
    let report = finder.find_with_report();

    let candidates: Vec<CandidateKey> = ranked(&report.keys)
        .into_iter()
        .map(|(key, bad_words)| CandidateKey {
            key: alphabet.render_key(&key),
            bad_words,
        })
        .collect();

    let best = best_key(&report.keys);
    let decrypted = best.map(|(key, _)| alphabet.substitute(text, key));
    let best = best.map(|(key, bad_words)| CandidateKey {
        key: alphabet.render_key(key),
        bad_words,
    });

    Ok(SolveResult {
        word_count: finder.word_count(),
        threshold: finder.threshold(),
        phase: report.phase,
        stats: report.stats,
        candidates,
        best,
        decrypted,
    })
}
