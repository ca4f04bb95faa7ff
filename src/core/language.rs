//! Supported languages
//!
//! A language fixes the alphabet and the naming of its dictionary tiers.

use super::Alphabet;
use std::fmt;

/// Latin alphabet used for English text
pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Cyrillic alphabet used for Russian text, `ё` sorted after `е`
pub const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Language of the ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    /// Create a language from its name
    ///
    /// Accepts "en"/"english" and "ru"/"rus"/"russian", case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "ru" | "rus" | "russian" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Symbols of this language's alphabet
    #[must_use]
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::English => ENGLISH_ALPHABET,
            Self::Russian => RUSSIAN_ALPHABET,
        }
    }

    /// The alphabet for this language
    ///
    /// # Panics
    /// Will not panic - both preset alphabets are valid.
    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        Alphabet::new(self.symbols()).expect("preset alphabets are valid")
    }

    /// File name of a dictionary tier, e.g. `0.txt` or `r0.txt`
    #[must_use]
    pub fn tier_file_name(self, tier: usize) -> String {
        match self {
            Self::English => format!("{tier}.txt"),
            Self::Russian => format!("r{tier}.txt"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "EN"),
            Self::Russian => write!(f, "RUS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_variants() {
        assert_eq!(Language::from_name("en"), Some(Language::English));
        assert_eq!(Language::from_name("English"), Some(Language::English));
        assert_eq!(Language::from_name("RU"), Some(Language::Russian));
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn preset_alphabets() {
        assert_eq!(Language::English.alphabet().len(), 26);
        assert_eq!(Language::Russian.alphabet().len(), 33);
    }

    #[test]
    fn tier_file_names() {
        assert_eq!(Language::English.tier_file_name(0), "0.txt");
        assert_eq!(Language::Russian.tier_file_name(3), "r3.txt");
    }
}
