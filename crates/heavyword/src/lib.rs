//! Library interface for the `heavyword` CLI.
//!
//! Exposes the argument parser as a library so integration tests can
//! exercise it directly. The actual entry point is in `main.rs`.

use camino::Utf8PathBuf;
use clap::Parser;

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, heavyword=trace)
    HEAVYWORD_MIN_WORD_LEN    Minimum word length for the token filter
    HEAVYWORD_SUMMARY_SIZE    Default summary size (k)
    HEAVYWORD_LOG_LEVEL       Log level (debug, info, warn, error)
";

/// Command-line interface definition for heavyword.
#[derive(Parser)]
#[command(name = "heavyword")]
#[command(about = "Heavy-hitter word frequency summaries for large text streams", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Text file to summarize
    pub file: Utf8PathBuf,

    /// Summary size k: report words occurring at least 1/k of the time
    #[arg(short = 'k', long, value_name = "K")]
    pub summary_size: Option<u64>,

    /// Minimum word length; shorter tokens are ignored
    #[arg(short = 'm', long, value_name = "LEN")]
    pub min_word_len: Option<usize>,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output as JSON (for scripting)
    #[arg(long)]
    pub json: bool,
}
