//! Command implementations

pub mod encrypt;
pub mod score;
pub mod solve;

pub use encrypt::{EncryptResult, KeyChoice, encrypt_text, random_key};
pub use score::{KeyAnalysis, analyze_key};
pub use solve::{
    CandidateKey, DEFAULT_MAX_WORDS, SolveConfig, SolveResult, extract_cipher_words, solve_text,
};
