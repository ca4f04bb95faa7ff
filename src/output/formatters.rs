//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Marker drawn at the threshold cell of a bad-words bar
pub const THRESHOLD_MARK: char = '│';

/// Bar showing the share of words a key fails on, with the threshold marked
///
/// # Examples
/// ```
/// use subst_solver::output::formatters::bad_words_bar;
///
/// assert_eq!(bad_words_bar(1, 2, 10, 10), "█░│░░░░░░░");
/// ```
#[must_use]
pub fn bad_words_bar(
    bad_words: usize,
    threshold: usize,
    word_count: usize,
    width: usize,
) -> String {
    let mut cells: Vec<char> = create_progress_bar(bad_words as f64, word_count as f64, width)
        .chars()
        .collect();
    if word_count > 0 && width > 0 {
        let mark = ((threshold as f64 / word_count as f64) * width as f64) as usize;
        cells[mark.min(width - 1)] = THRESHOLD_MARK;
    }
    cells.into_iter().collect()
}

/// Render a key as `cipher→plain` pairs, `?` for unknown slots
///
/// `alphabet` and `key` are the rendered forms, one character per slot.
///
/// # Examples
/// ```
/// use subst_solver::output::formatters::mapping_table;
///
/// assert_eq!(mapping_table("abc", "ca."), "a→c b→a c→?");
/// ```
#[must_use]
pub fn mapping_table(alphabet: &str, key: &str) -> String {
    alphabet
        .chars()
        .zip(key.chars())
        .map(|(cipher, plain)| {
            let plain = if plain == '.' { '?' } else { plain };
            format!("{cipher}→{plain}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
