//! Substitution Solver - CLI
//!
//! Breaks monoalphabetic substitution ciphers by matching ciphertext words
//! against a dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use subst_solver::{
    commands::{DEFAULT_MAX_WORDS, KeyChoice, SolveConfig, analyze_key, encrypt_text, solve_text},
    core::Language,
    logging::init_logger,
    output::{print_encrypt_result, print_key_analysis, print_solve_result},
    solver::{DEFAULT_MAX_BAD_WORDS_RATE, SearchConfig},
    wordlists::{
        WordList,
        loader::{DEFAULT_MAX_TIER, MAX_TIER_LIMIT, TierConfig, load_tiers},
    },
};

#[derive(Parser)]
#[command(
    name = "subst_solver",
    about = "Monoalphabetic substitution cipher solver using dictionary template matching",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language: 'en' (default) or 'ru'
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Directory holding the dictionary tiers (0.txt, 1.txt, ... or r0.txt, ...)
    #[arg(short, long, global = true, default_value = "words")]
    dict_dir: PathBuf,

    /// Number of dictionary tiers to load (1-7, lower tiers are more common words)
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TIER)]
    max_tier: usize,

    /// Fraction of ciphertext words allowed to miss the dictionary
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_BAD_WORDS_RATE)]
    max_bad_rate: f64,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a ciphertext file and write the decrypted text
    Solve {
        /// Ciphertext file
        input: PathBuf,

        /// Where to write the decrypted text
        #[arg(short, long, default_value = "decrypted.txt")]
        output: PathBuf,

        /// Maximum number of ciphertext words used by the search
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Stop after recording this many complete keys
        #[arg(long)]
        max_leaves: Option<usize>,

        /// Show search statistics and the key mapping
        #[arg(short, long)]
        verbose: bool,
    },

    /// Encrypt a plaintext file (random key unless --key or --shift is given)
    Encrypt {
        /// Plaintext file
        input: PathBuf,

        /// Encryption key, one character per alphabet symbol
        #[arg(short, long, conflicts_with = "shift")]
        key: Option<String>,

        /// Caesar shift
        #[arg(short, long)]
        shift: Option<usize>,

        /// Where to write the ciphertext (printed otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score a decryption key against a ciphertext file
    Score {
        /// Ciphertext file
        input: PathBuf,

        /// Decryption key, one character per alphabet symbol, '.' for unknown
        key: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let Some(language) = Language::from_name(&cli.language) else {
        bail!("Unknown language '{}', expected 'en' or 'ru'", cli.language);
    };
    if !(1..=MAX_TIER_LIMIT).contains(&cli.max_tier) {
        bail!("--max-tier must be between 1 and {MAX_TIER_LIMIT}");
    }
    if !(0.0..=1.0).contains(&cli.max_bad_rate) {
        bail!("--max-bad-rate must be between 0 and 1");
    }
    log::info!("Selected {language} language");

    let tiers = TierConfig::new(&cli.dict_dir, language, cli.max_tier);
    let search = SearchConfig::default().with_max_bad_words_rate(cli.max_bad_rate);

    match cli.command {
        Commands::Solve {
            input,
            output,
            max_words,
            max_leaves,
            verbose,
        } => {
            let config = SolveConfig {
                max_words,
                search: search.with_max_leaves(max_leaves),
                ..SolveConfig::default()
            };
            run_solve_command(&input, &output, &tiers, &config, verbose)
        }
        Commands::Encrypt {
            input,
            key,
            shift,
            output,
        } => run_encrypt_command(&input, language, key, shift, output.as_deref()),
        Commands::Score { input, key } => {
            let config = SolveConfig {
                search,
                ..SolveConfig::default()
            };
            run_score_command(&input, &key, &tiers, &config)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn load_dictionary(tiers: &TierConfig) -> Result<WordList> {
    let word_list = load_tiers(tiers);
    if word_list.is_empty() {
        bail!(
            "No dictionary words found in {}, check --dict-dir",
            tiers.dir.display()
        );
    }
    Ok(word_list)
}

fn run_solve_command(
    input: &Path,
    output: &Path,
    tiers: &TierConfig,
    config: &SolveConfig,
    verbose: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let word_list = load_dictionary(tiers)?;
    let alphabet = word_list.alphabet().to_string();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")?);
    spinner.set_message("Searching for keys...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = solve_text(&text, word_list, config);
    spinner.finish_and_clear();
    let result = result.map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, &alphabet, verbose);

    if let Some(decrypted) = &result.decrypted {
        fs::write(output, decrypted)
            .with_context(|| format!("Cannot write {}", output.display()))?;
        log::info!("Decrypted text written to {}", output.display());
    }
    Ok(())
}

fn run_encrypt_command(
    input: &Path,
    language: Language,
    key: Option<String>,
    shift: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let text = read_input(input)?;
    let choice = match (key, shift) {
        (Some(key), _) => KeyChoice::Explicit(key.to_lowercase()),
        (None, Some(shift)) => KeyChoice::Shift(shift),
        (None, None) => KeyChoice::Random,
    };

    let result =
        encrypt_text(&text, &language.alphabet(), &choice).map_err(|e| anyhow::anyhow!(e))?;

    if let Some(path) = output {
        fs::write(path, &result.ciphertext)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        println!("Encryption key: {}", result.encryption_key);
        println!("Decryption key: {}", result.decryption_key);
        log::info!("Ciphertext written to {}", path.display());
    } else {
        print_encrypt_result(&result);
    }
    Ok(())
}

fn run_score_command(
    input: &Path,
    key: &str,
    tiers: &TierConfig,
    config: &SolveConfig,
) -> Result<()> {
    let text = read_input(input)?;
    let word_list = load_dictionary(tiers)?;
    let alphabet = word_list.alphabet().to_string();

    let analysis = analyze_key(&text, word_list, key, config).map_err(|e| anyhow::anyhow!(e))?;
    print_key_analysis(&analysis, &alphabet);
    Ok(())
}
