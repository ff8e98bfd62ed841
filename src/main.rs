//! search <target> [max_length] [charset]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use charset_search::{Deadline, SearchBound, SearchConfig};

/// Brute force a password by trying every string over a charset, shortest first.
#[derive(Debug, Parser)]
#[command(name = "search", version, about)]
struct Cli {
    /// The password to brute force.
    target: String,

    /// Maximum length to search (defaults to the target length).
    max_length: Option<SearchBound>,

    /// Characters to try (defaults to lowercase letters and digits).
    charset: Option<String>,

    /// Path to a TOML config file. Positional arguments take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up after this many milliseconds.
    #[arg(long, value_name = "MS")]
    time_limit: Option<u64>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help と --version は stdout に出力して正常終了する。
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(bound) = cli.max_length {
        config.max_length = Some(bound.get());
    }
    if let Some(charset) = cli.charset {
        config.charset = charset;
    }
    if let Some(ms) = cli.time_limit {
        config.time_limit_ms = Some(ms);
    }
    config.validate();

    let enumerator = config.enumerator(&cli.target)?;

    tracing::info!(
        "Brute forcing password up to length {} using charset: {}",
        enumerator.bound(),
        enumerator.alphabet()
    );

    let deadline = config.time_limit().map(Deadline::after);
    let result = enumerator.search_cancellable(&cli.target, deadline)?;

    println!("{result}");
    tracing::debug!(
        outcome = ?result.outcome(),
        attempts = result.attempts(),
        elapsed = ?result.elapsed(),
        "search finished"
    );

    Ok(())
}
