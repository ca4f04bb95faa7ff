//! Display functions for command results

use super::formatters::{bad_words_bar, mapping_table};
use crate::commands::{EncryptResult, KeyAnalysis, SolveResult};
use colored::Colorize;

/// Number of candidate keys listed before the best key
const MAX_LISTED_CANDIDATES: usize = 20;

/// Print the result of solving a ciphertext
pub fn print_solve_result(result: &SolveResult, alphabet: &str, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SUBSTITUTION SOLVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Words used:       {}", result.word_count);
    println!("   Bad words allowed: {}", result.threshold);
    println!("   Solved by:        {}", result.phase);

    if verbose {
        let stats = &result.stats;
        println!("   Nodes visited:    {}", stats.nodes);
        println!("   Keys probed:      {}", stats.probes);
        println!("   Symbols pruned:   {}", stats.pruned);
        println!("   Dead ends:        {}", stats.exhausted);
        if stats.capped {
            println!("   {}", "Leaf limit reached".yellow());
        }
    }

    let Some(best) = &result.best else {
        println!();
        println!(
            "{}",
            "❌ Key not found, try to increase the bad word rate"
                .red()
                .bold()
        );
        return;
    };

    println!("\n🔑 {}", "Possible keys:".bright_cyan().bold());
    for candidate in result.candidates.iter().take(MAX_LISTED_CANDIDATES) {
        println!(
            "   {} [{}] {} bad words",
            candidate.key,
            bad_words_bar(candidate.bad_words, result.threshold, result.word_count, 20).green(),
            candidate.bad_words
        );
    }
    if result.candidates.len() > MAX_LISTED_CANDIDATES {
        println!(
            "   … and {} more",
            result.candidates.len() - MAX_LISTED_CANDIDATES
        );
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Best key: {}, bad words: {}",
        best.key.bright_yellow().bold(),
        best.bad_words
    );
    if verbose {
        println!("   {}", mapping_table(alphabet, &best.key));
    }
    println!("{}", "─".repeat(60).cyan());

    if let Some(text) = &result.decrypted {
        println!("\nText:\n\n{text}");
    }
}

/// Print the result of scoring a key
pub fn print_key_analysis(analysis: &KeyAnalysis, alphabet: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "KEY ANALYSIS:".bright_cyan().bold(),
        analysis.key.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   {}", mapping_table(alphabet, &analysis.key));
    println!(
        "\n   Bad words:   [{}] {}/{} (allowed {})",
        bad_words_bar(
            analysis.bad_words.len(),
            analysis.threshold,
            analysis.word_count,
            30
        )
        .green(),
        analysis.bad_words.len(),
        analysis.word_count,
        analysis.threshold
    );

    for (cipher, plain) in &analysis.bad_words {
        println!("     {cipher} → {}", plain.red());
    }

    println!();
    if analysis.acceptable {
        println!("{}", "✅ Key is acceptable".green().bold());
    } else {
        println!("{}", "❌ Key exceeds the bad word limit".red().bold());
    }

    println!("\nText:\n\n{}", analysis.decrypted);
}

/// Print the result of encrypting a text
pub fn print_encrypt_result(result: &EncryptResult) {
    println!(
        "Encryption key: {}",
        result.encryption_key.bright_yellow().bold()
    );
    println!(
        "Decryption key: {}",
        result.decryption_key.bright_green().bold()
    );
    println!("\n{}", result.ciphertext);
}
