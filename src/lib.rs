//! Substitution Solver
//!
//! Recovers the key of a monoalphabetic substitution cipher by dictionary
//! template matching, without letter-frequency statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use subst_solver::core::Alphabet;
//! use subst_solver::solver::{KeyFinder, SearchConfig, best_key};
//! use subst_solver::wordlists::WordList;
//!
//! let alphabet = Alphabet::new("abcde").unwrap();
//! let words = WordList::from_words(alphabet, ["abc", "bcd"]);
//!
//! let finder = KeyFinder::new(words, &["bcd"], SearchConfig::default()).unwrap();
//! let keys = finder.find();
//!
//! let (key, bad_words) = best_key(&keys).unwrap();
//! println!("{} ({bad_words} bad words)", finder.alphabet().render_key(key));
//! ```

// Core domain types
pub mod core;

// Key search
pub mod solver;

// Dictionary index and tier loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
