//! Core domain types for substitution ciphers
//!
//! Alphabets, keys, symbol sets and word templates. Everything here works on
//! dense symbol indices; text only appears at the [`Alphabet`] boundary.

mod alphabet;
mod key;
mod language;
mod symbol_set;
mod template;

pub use alphabet::{Alphabet, AlphabetError, KeyError, WILDCARD_CHAR};
pub use key::Key;
pub use language::{ENGLISH_ALPHABET, Language, RUSSIAN_ALPHABET};
pub use symbol_set::SymbolSet;
pub use template::{distinct_count, matches, wildcard_masks};

/// Index of a symbol within its alphabet
pub type Symbol = u8;

/// Marker for an unrevealed template position or an unknown key slot
pub const WILDCARD: Symbol = Symbol::MAX;
