//! Substitution key search
//!
//! [`KeyFinder`] scores keys against a [`WordList`](crate::wordlists::WordList)
//! and searches the permutation space in two phases.

mod config;
mod engine;
pub mod quick;
mod results;
pub mod scoring;
pub mod search;

pub use config::{DEFAULT_MAX_BAD_WORDS_RATE, SearchConfig};
pub use engine::KeyFinder;
pub use results::{FoundKeys, Phase, SearchReport, SearchStats, best_key, ranked};
pub use scoring::CipherWord;
pub use search::Domains;
