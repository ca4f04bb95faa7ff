//! Cipher alphabet
//!
//! Maps the symbols of a language onto dense indices. Every other type in
//! the crate works with those indices and only converts back to `char`
//! when text is rendered.

use super::{Key, Symbol, SymbolSet, WILDCARD};
use rustc_hash::FxHashMap;
use std::fmt;

/// Character used when rendering unknown key slots and wildcards
pub const WILDCARD_CHAR: char = '.';

/// An ordered set of distinct symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: FxHashMap<char, Symbol>,
}

/// Error type for alphabet construction and text conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    TooLarge(usize),
    Duplicate(char),
    ReservedSymbol(char),
    UnknownSymbol(char),
    InvalidKey(KeyError),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one symbol"),
            Self::TooLarge(len) => write!(
                f,
                "Alphabet has {len} symbols, at most {} are supported",
                SymbolSet::CAPACITY
            ),
            Self::Duplicate(c) => write!(f, "Alphabet symbol '{c}' appears more than once"),
            Self::ReservedSymbol(c) => {
                write!(f, "Alphabet symbol '{c}' is reserved for unknown key slots")
            }
            Self::UnknownSymbol(c) => write!(f, "Symbol '{c}' is not in the alphabet"),
            Self::InvalidKey(e) => write!(f, "Invalid key: {e}"),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Error type for malformed keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    WrongLength { expected: usize, got: usize },
    OutOfRange(Symbol),
    Repeated(Symbol),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "Key must have {expected} slots, got {got}")
            }
            Self::OutOfRange(symbol) => write!(f, "Key symbol index {symbol} is out of range"),
            Self::Repeated(symbol) => {
                write!(f, "Key maps two positions to symbol index {symbol}")
            }
        }
    }
}

impl std::error::Error for KeyError {}

impl From<KeyError> for AlphabetError {
    fn from(e: KeyError) -> Self {
        Self::InvalidKey(e)
    }
}

impl Alphabet {
    /// Create an alphabet from its symbols in order
    ///
    /// # Errors
    /// Returns `AlphabetError` if the alphabet is empty, holds more than 64
    /// symbols, repeats a symbol, or uses the wildcard character.
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::Alphabet;
    ///
    /// let abc = Alphabet::new("abcde").unwrap();
    /// assert_eq!(abc.len(), 5);
    /// assert_eq!(abc.index_of('c'), Some(2));
    ///
    /// assert!(Alphabet::new("abca").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if symbols.len() > SymbolSet::CAPACITY {
            return Err(AlphabetError::TooLarge(symbols.len()));
        }

        let mut index = FxHashMap::default();
        for (i, &c) in symbols.iter().enumerate() {
            if c == WILDCARD_CHAR {
                return Err(AlphabetError::ReservedSymbol(c));
            }
            if index.insert(c, i as Symbol).is_some() {
                return Err(AlphabetError::Duplicate(c));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<Symbol> {
        self.index.get(&c).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// Character for a symbol index, the wildcard character for [`WILDCARD`]
    ///
    /// # Panics
    /// Panics if `symbol` is neither a valid index nor [`WILDCARD`].
    #[must_use]
    pub fn symbol(&self, symbol: Symbol) -> char {
        if symbol == WILDCARD {
            WILDCARD_CHAR
        } else {
            self.symbols[symbol as usize]
        }
    }

    /// The symbols in order
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Convert a word into symbol indices
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` for the first character that is
    /// not part of the alphabet.
    pub fn encode(&self, word: &str) -> Result<Vec<Symbol>, AlphabetError> {
        word.chars()
            .map(|c| self.index_of(c).ok_or(AlphabetError::UnknownSymbol(c)))
            .collect()
    }

    /// Render symbol indices back to text
    #[must_use]
    pub fn render(&self, symbols: &[Symbol]) -> String {
        symbols.iter().map(|&s| self.symbol(s)).collect()
    }

    /// Render a key in the `abc.e` form, one character per slot
    #[must_use]
    pub fn render_key(&self, key: &Key) -> String {
        self.render(key.slots())
    }

    /// Parse a key written as one character per slot
    ///
    /// `.` marks an unknown slot.
    ///
    /// # Errors
    /// Returns `AlphabetError` if a character is outside the alphabet, or the
    /// key has the wrong length or repeats a symbol.
    ///
    /// # Examples
    /// ```
    /// use subst_solver::core::Alphabet;
    ///
    /// let abc = Alphabet::new("abcde").unwrap();
    /// let key = abc.parse_key("eabcd").unwrap();
    /// assert!(key.is_complete());
    ///
    /// let partial = abc.parse_key("e.b..").unwrap();
    /// assert_eq!(partial.unknown_positions().count(), 3);
    ///
    /// assert!(abc.parse_key("eabce").is_err());
    /// ```
    pub fn parse_key(&self, text: &str) -> Result<Key, AlphabetError> {
        let slots = text
            .chars()
            .map(|c| {
                if c == WILDCARD_CHAR {
                    Ok(WILDCARD)
                } else {
                    self.index_of(c).ok_or(AlphabetError::UnknownSymbol(c))
                }
            })
            .collect::<Result<Vec<Symbol>, _>>()?;

        Ok(Key::from_symbols(self.len(), slots)?)
    }

    /// Apply a key to free text
    ///
    /// The text is lower-cased; each alphabet symbol at index `i` becomes
    /// `key[i]`, everything else passes through. Unknown key slots leave
    /// the symbol unchanged.
    ///
    /// # Panics
    /// Panics if the key length differs from the alphabet length.
    #[must_use]
    pub fn substitute(&self, text: &str, key: &Key) -> String {
        assert_eq!(key.len(), self.len(), "key does not fit the alphabet");

        text.to_lowercase()
            .chars()
            .map(|c| match self.index_of(c).and_then(|i| key.get(i as usize)) {
                Some(plain) => self.symbols[plain as usize],
                None => c,
            })
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
