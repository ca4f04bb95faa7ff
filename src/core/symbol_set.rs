//! Compact set of alphabet symbols
//!
//! Candidate domains are stored as 64-bit masks so that copying a whole
//! domain table when branching is a cheap `Vec<u64>` clone.

use super::Symbol;
use std::fmt;

/// Set of symbol indices below 64
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SymbolSet(u64);

impl SymbolSet {
    /// Largest alphabet a `SymbolSet` can hold
    pub const CAPACITY: usize = 64;

    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Set holding every symbol `0..len`
    ///
    /// # Panics
    /// Panics if `len` exceeds [`SymbolSet::CAPACITY`].
    #[must_use]
    pub const fn full(len: usize) -> Self {
        assert!(len <= Self::CAPACITY, "alphabet too large for SymbolSet");
        if len == Self::CAPACITY {
            Self(u64::MAX)
        } else {
            Self((1u64 << len) - 1)
        }
    }

    /// Set holding exactly one symbol
    #[inline]
    #[must_use]
    pub const fn single(symbol: Symbol) -> Self {
        Self(1u64 << symbol)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        (symbol as usize) < Self::CAPACITY && self.0 & (1u64 << symbol) != 0
    }

    #[inline]
    pub fn insert(&mut self, symbol: Symbol) {
        self.0 |= 1u64 << symbol;
    }

    #[inline]
    pub fn remove(&mut self, symbol: Symbol) {
        self.0 &= !(1u64 << symbol);
    }

    /// Number of symbols in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate symbols in ascending order
    pub fn iter(self) -> impl Iterator<Item = Symbol> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let symbol = bits.trailing_zeros() as Symbol;
            bits &= bits - 1;
            Some(symbol)
        })
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
