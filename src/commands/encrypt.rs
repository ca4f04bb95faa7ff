//! Encryption command
//!
//! Produces substitution ciphertexts, mostly to have something to solve.

use crate::core::{Alphabet, Key, Symbol};
use rand::seq::SliceRandom;

/// How the encryption key is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChoice {
    /// Explicit permutation, one character per alphabet slot
    Explicit(String),
    /// Caesar shift
    Shift(usize),
    /// Uniformly random permutation
    Random,
}

/// Result of encrypting a text
pub struct EncryptResult {
    pub encryption_key: String,
    /// Key that undoes the encryption, in the form `solve` reports
    pub decryption_key: String,
    pub ciphertext: String,
}

/// Random complete key over `len` symbols
///
/// # Panics
/// Will not panic - a shuffled identity is always a valid permutation.
#[must_use]
pub fn random_key(len: usize) -> Key {
    let mut slots: Vec<Symbol> = (0..len).map(|i| i as Symbol).collect();
    slots.shuffle(&mut rand::rng());
    Key::from_symbols(len, slots).expect("shuffled identity is a permutation")
}

/// Encrypt a text with the chosen key
///
/// # Errors
///
/// Returns an error if an explicit key is malformed or incomplete.
pub fn encrypt_text(
    text: &str,
    alphabet: &Alphabet,
    choice: &KeyChoice,
) -> Result<EncryptResult, String> {
    let key = match choice {
        KeyChoice::Explicit(key) => {
            let key = alphabet
                .parse_key(key)
                .map_err(|e| format!("Invalid encryption key: {e}"))?;
            if !key.is_complete() {
                return Err("Encryption key must not contain unknown slots".to_string());
            }
            key
        }
        KeyChoice::Shift(shift) => Key::rotation(alphabet.len(), shift % alphabet.len()),
        KeyChoice::Random => random_key(alphabet.len()),
    };

    let decryption = key
        .inverse()
        .ok_or_else(|| "Encryption key is not a permutation".to_string())?;

    Ok(EncryptResult {
        encryption_key: alphabet.render_key(&key),
        decryption_key: alphabet.render_key(&decryption),
        ciphertext: alphabet.substitute(text, &key),
    })
}
