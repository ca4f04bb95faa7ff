//! Dictionary tier loading
//!
//! Vocabularies come as newline-delimited tier files, lower tiers holding
//! more common words. Tiers `0..max_tier` are merged into one [`WordList`].

use super::WordList;
use crate::core::Language;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default number of tiers to load (tiers 0 and 1)
pub const DEFAULT_MAX_TIER: usize = 2;

/// Highest tier count the shipped vocabularies provide
pub const MAX_TIER_LIMIT: usize = 7;

/// Where and how many dictionary tiers to load
#[derive(Debug, Clone)]
pub struct TierConfig {
    pub dir: PathBuf,
    pub language: Language,
    pub max_tier: usize,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("words"),
            language: Language::default(),
            max_tier: DEFAULT_MAX_TIER,
        }
    }
}

impl TierConfig {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, language: Language, max_tier: usize) -> Self {
        Self {
            dir: dir.into(),
            language,
            max_tier,
        }
    }

    /// Path of a single tier file
    #[must_use]
    pub fn tier_path(&self, tier: usize) -> PathBuf {
        self.dir.join(self.language.tier_file_name(tier))
    }
}

/// Load every configured tier into one word list
///
/// Missing or unreadable tiers are logged and skipped; loading never fails.
/// Lines that are not valid UTF-8 are dropped like any other foreign word.
///
/// # Examples
/// ```no_run
/// use subst_solver::core::Language;
/// use subst_solver::wordlists::loader::{TierConfig, load_tiers};
///
/// let words = load_tiers(&TierConfig::new("words", Language::English, 2));
/// println!("Loaded {} words", words.word_count());
/// ```
#[must_use]
pub fn load_tiers(config: &TierConfig) -> WordList {
    let mut list = WordList::new(config.language.alphabet());

    for tier in 0..config.max_tier {
        let path = config.tier_path(tier);
        log::info!("Loading {} dictionary...", path.display());

        match read_tier(&path) {
            Ok(content) => {
                let added = list.extend(words_from_str(&content));
                log::debug!("Tier {tier}: {added} words indexed");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Tier {tier} not found at {}, skipping", path.display());
            }
            Err(e) => {
                log::warn!("Cannot read tier {tier} at {}: {e}", path.display());
            }
        }
    }

    log::info!(
        "All dictionaries loaded: {} words in {} buckets",
        list.word_count(),
        list.bucket_count()
    );
    list
}

/// Read a tier file, replacing invalid UTF-8 so a bad line only loses
/// its own word
fn read_tier(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split tier file content into trimmed, non-empty lines
pub fn words_from_str(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
