//! Substitution keys
//!
//! `key[i]` is the plaintext symbol that ciphertext symbol `i` decodes to,
//! or [`WILDCARD`] while that slot is still undecided.

use super::alphabet::KeyError;
use super::{Symbol, SymbolSet, WILDCARD};

/// A partial permutation of the alphabet
///
/// Known slots never repeat a symbol. A key with no unknown slot is a full
/// permutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    slots: Box<[Symbol]>,
}

impl Key {
    /// Key of the given length with every slot unknown
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            slots: vec![WILDCARD; len].into_boxed_slice(),
        }
    }

    /// Build a key from explicit slots
    ///
    /// # Errors
    /// Returns `KeyError` if the length is not `alphabet_len`, a slot holds
    /// an index outside the alphabet, or two slots share a symbol.
    pub fn from_symbols(alphabet_len: usize, slots: Vec<Symbol>) -> Result<Self, KeyError> {
        if slots.len() != alphabet_len {
            return Err(KeyError::WrongLength {
                expected: alphabet_len,
                got: slots.len(),
            });
        }

        let mut seen = SymbolSet::EMPTY;
        for &symbol in &slots {
            if symbol == WILDCARD {
                continue;
            }
            if symbol as usize >= alphabet_len {
                return Err(KeyError::OutOfRange(symbol));
            }
            if seen.contains(symbol) {
                return Err(KeyError::Repeated(symbol));
            }
            seen.insert(symbol);
        }

        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Caesar key: ciphertext symbol `i` decodes to `(i + shift) mod len`
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::{Alphabet, Key};
    ///
    /// let abc = Alphabet::new("abcde").unwrap();
    /// assert_eq!(abc.render_key(&Key::rotation(5, 2)), "cdeab");
    /// ```
    #[must_use]
    pub fn rotation(len: usize, shift: usize) -> Self {
        Self {
            slots: (0..len).map(|i| ((i + shift) % len) as Symbol).collect(),
        }
    }

    /// Rotation of the reversed alphabet (Atbash followed by a shift)
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::{Alphabet, Key};
    ///
    /// let abc = Alphabet::new("abcde").unwrap();
    /// assert_eq!(abc.render_key(&Key::reversed_rotation(5, 0)), "edcba");
    /// assert_eq!(abc.render_key(&Key::reversed_rotation(5, 1)), "dcbae");
    /// ```
    #[must_use]
    pub fn reversed_rotation(len: usize, shift: usize) -> Self {
        Self {
            slots: (0..len)
                .map(|i| (len - 1 - (i + shift) % len) as Symbol)
                .collect(),
        }
    }

    /// Number of slots (the alphabet length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw slots, [`WILDCARD`] where unknown
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Symbol] {
        &self.slots
    }

    /// Plaintext symbol at `pos`, `None` while unknown
    ///
    /// # Panics
    /// Panics if `pos` is outside the key.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<Symbol> {
        match self.slots[pos] {
            WILDCARD => None,
            symbol => Some(symbol),
        }
    }

    /// Copy of this key with `pos` set to `symbol`
    ///
    /// Injectivity is the caller's responsibility; the search only assigns
    /// symbols taken from a domain that already excludes used ones.
    ///
    /// # Panics
    /// Panics if `pos` is outside the key.
    #[must_use]
    pub fn with(&self, pos: usize, symbol: Symbol) -> Self {
        let mut slots = self.slots.clone();
        slots[pos] = symbol;
        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&WILDCARD)
    }

    /// Positions still unknown, in ascending order
    pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, &symbol)| symbol == WILDCARD)
            .map(|(pos, _)| pos)
    }

    /// Check that no plaintext symbol is used twice
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut seen = SymbolSet::EMPTY;
        self.slots
            .iter()
            .filter(|&&symbol| symbol != WILDCARD)
            .all(|&symbol| {
                let fresh = !seen.contains(symbol);
                seen.insert(symbol);
                fresh
            })
    }

    /// The inverse permutation, `None` unless the key is complete
    ///
    /// Turns an encryption key into the matching decryption key and back.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_complete() {
            return None;
        }
        let mut slots = vec![WILDCARD; self.len()];
        for (pos, &symbol) in self.slots.iter().enumerate() {
            slots[symbol as usize] = pos as Symbol;
        }
        Some(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Translate a ciphertext word into `out`
    ///
    /// Known slots yield plaintext symbols, unknown slots yield [`WILDCARD`].
    /// `out` is cleared first so callers can reuse one buffer.
    #[inline]
    pub fn translate(&self, word: &[Symbol], out: &mut Vec<Symbol>) {
        out.clear();
        out.extend(word.iter().map(|&symbol| self.slots[symbol as usize]));
    }
}
