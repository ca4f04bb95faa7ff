//! Search configuration

/// Default fraction of ciphertext words allowed to miss the dictionary
pub const DEFAULT_MAX_BAD_WORDS_RATE: f64 = 0.06;

/// Tunables of the key search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Fraction of words allowed to fail matching for a key to be acceptable
    pub max_bad_words_rate: f64,
    /// Stop recording complete keys after this many
    pub max_leaves: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_bad_words_rate: DEFAULT_MAX_BAD_WORDS_RATE,
            max_leaves: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_max_bad_words_rate(mut self, rate: f64) -> Self {
        self.max_bad_words_rate = rate;
        self
    }

    #[must_use]
    pub const fn with_max_leaves(mut self, max_leaves: Option<usize>) -> Self {
        self.max_leaves = max_leaves;
        self
    }

    /// Number of bad words a key may have out of `word_count`
    ///
    /// # Examples
    /// ```
    /// use subst_solver::solver::SearchConfig;
    ///
    /// let config = SearchConfig::default();
    /// assert_eq!(config.threshold(200), 12);
    /// assert_eq!(config.threshold(16), 0);
    /// assert_eq!(config.threshold(0), 0);
    /// ```
    #[must_use]
    pub fn threshold(&self, word_count: usize) -> usize {
        (word_count as f64 * self.max_bad_words_rate).floor() as usize
    }
}
