//! heavyword CLI
#![deny(unsafe_code)]

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use heavyword::Cli;
use heavyword_core::{ConfigLoader, SummaryEngine};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;

    let mut loader = ConfigLoader::new().with_project_dir(&cwd);
    if let Some(ref config_path) = cli.config {
        loader = loader.with_file(config_path);
    }
    let config = loader.load().context("failed to load configuration")?;

    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    observability::init(filter);

    let k = cli.summary_size.unwrap_or(config.summary_size);
    let min_word_len = cli.min_word_len.unwrap_or(config.min_word_len);
    debug!(file = %cli.file, k, min_word_len, "CLI initialized");

    let started = Instant::now();
    let result = summarize(&cli, k, min_word_len);
    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "finished");

    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

fn summarize(cli: &Cli, k: u64, min_word_len: usize) -> anyhow::Result<()> {
    let mut engine = SummaryEngine::from_path(&cli.file)
        .with_context(|| format!("cannot summarize {}", cli.file))?
        .with_min_word_len(min_word_len);

    engine
        .run(k)
        .with_context(|| format!("invalid summary size {k}"))?;

    // A mid-pass read failure leaves the engine incomplete without an
    // error from run(); it surfaces here as NotReady.
    let report = engine.report().context("summary did not complete")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (position, entry) in report.entries.iter().enumerate() {
        println!("{}. {} --> {}", position + 1, entry.word, entry.count);
    }
    println!(
        "{} of {} candidate words met the threshold ({} filtered words, k = {k})",
        report.emitted,
        engine.candidate_count().context("summary did not complete")?,
        report.filtered_words,
    );
    Ok(())
}
