//! Key scoring command
//!
//! Evaluates a user-supplied decryption key against a ciphertext.

use super::solve::{SolveConfig, extract_cipher_words};
use crate::solver::KeyFinder;
use crate::wordlists::WordList;

/// Result of scoring a key
pub struct KeyAnalysis {
    pub key: String,
    pub word_count: usize,
    pub threshold: usize,
    /// Ciphertext words matching nothing under the key, with their decryption
    pub bad_words: Vec<(String, String)>,
    pub acceptable: bool,
    pub decrypted: String,
}

/// Score a decryption key against a ciphertext
///
/// The key may leave slots unknown (`.`); those positions act as wildcards
/// while scoring and stay untouched in the decrypted text.
///
/// # Errors
///
/// Returns an error if:
/// - The key is malformed for the word list's alphabet
/// - The ciphertext yields no usable words
pub fn analyze_key(
    text: &str,
    word_list: WordList,
    key: &str,
    config: &SolveConfig,
) -> Result<KeyAnalysis, String> {
    let alphabet = word_list.alphabet().clone();
    let key_obj = alphabet
        .parse_key(&key.to_lowercase())
        .map_err(|e| format!("Invalid key: {e}"))?;

    let words = extract_cipher_words(text, &alphabet, config.max_word_length, config.max_words);
    if words.is_empty() {
        return Err("Ciphertext contains no words in the selected alphabet".to_string());
    }

    let finder = KeyFinder::new(word_list, &words, config.search)
        .map_err(|e| format!("Invalid ciphertext word: {e}"))?;

    let bad_words: Vec<(String, String)> = finder
        .bad_words(&key_obj)
        .into_iter()
        .map(|i| {
            let word = finder.word(i);
            let decrypted = alphabet.substitute(&word, &key_obj);
            (word, decrypted)
        })
        .collect();

    Ok(KeyAnalysis {
        key: alphabet.render_key(&key_obj),
        word_count: finder.word_count(),
        threshold: finder.threshold(),
        acceptable: bad_words.len() <= finder.threshold(),
        bad_words,
        decrypted: alphabet.substitute(text, &key_obj),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn word_list() -> WordList {
        let alphabet = Alphabet::new("abcde").unwrap();
        WordList::from_words(alphabet, ["abc", "bcd", "bad"])
    }

    #[test]
    fn correct_key_is_acceptable() {
        let result = analyze_key("bcd cbe", word_list(), "eabcd", &SolveConfig::default()).unwrap();

        assert_eq!(result.key, "eabcd");
        assert_eq!(result.word_count, 2);
        assert!(result.bad_words.is_empty());
        assert!(result.acceptable);
        assert_eq!(result.decrypted, "abc bad");
    }

    #[test]
    fn wrong_key_lists_bad_words() {
        let result = analyze_key("bcd cbe", word_list(), "abcde", &SolveConfig::default()).unwrap();

        assert_eq!(
            result.bad_words,
            vec![("cbe".to_string(), "cbe".to_string())]
        );
        assert!(!result.acceptable);
    }

    #[test]
    fn partial_key_uses_wildcards() {
        let result = analyze_key("bcd", word_list(), "e....", &SolveConfig::default()).unwrap();
        assert!(result.acceptable);
        assert_eq!(result.decrypted, "bcd");
    }

    #[test]
    fn uppercase_key_is_accepted() {
        assert!(analyze_key("bcd", word_list(), "EABCD", &SolveConfig::default()).is_ok());
    }

    #[test]
    fn malformed_key_is_error() {
        assert!(analyze_key("bcd", word_list(), "eabc", &SolveConfig::default()).is_err());
        assert!(analyze_key("bcd", word_list(), "eebcd", &SolveConfig::default()).is_err());
    }
}
