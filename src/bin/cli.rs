//! cloudsnoop CLI
//!
//! Fetches a batch of document URLs, extracts their text, and reports the
//! cloud-storage sharing links embedded in them.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use cloudsnoop::{
    config::Config,
    error::{AppError, Result},
    models::ScanSelection,
    pipeline,
    services::HttpFetcher,
    storage::StagingDir,
};

/// cloudsnoop - Cloud-storage link scanner
#[derive(Parser, Debug)]
#[command(
    name = "cloudsnoop",
    version,
    about = "Scans remote documents for embedded cloud-storage sharing links"
)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "file"])))]
struct Cli {
    /// Comma-separated URLs to fetch
    #[arg(long)]
    url: Option<String>,

    /// Path to a file containing URLs, one per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Link categories to extract (drive, sharepoint, dropbox, all)
    #[arg(long, default_value = "drive")]
    snoop: String,

    /// Directory under which fetched documents are staged (default: dump)
    #[arg(long, value_name = "DIR")]
    staging_dir: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Collect the input URL list from the CLI arguments.
fn load_urls(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.file {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::input(format!("failed to read {}: {}", path.display(), e)))?;
        return Ok(content.lines().map(|line| line.to_string()).collect());
    }

    if let Some(urls) = &cli.url {
        return Ok(urls.split(',').map(|url| url.to_string()).collect());
    }

    // clap's required input group makes this unreachable in practice.
    Err(AppError::input(
        "provide URLs with --url or a file with --file",
    ))
}

/// Apply CLI flag overrides on top of the loaded configuration.
fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(dir) = &cli.staging_dir {
        config.staging.dir = dir.clone();
    }
    config
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    let config = apply_overrides(&cli, config);

    let urls = load_urls(&cli)?;
    let selection = ScanSelection::parse(&cli.snoop);
    if selection.is_empty() {
        log::warn!("No known categories selected; links will not be reported");
    }

    // Everything staged under this directory is removed when it drops,
    // however many URLs were processed.
    let staging = StagingDir::create(&config.staging.dir)?;
    let fetcher = HttpFetcher::new(&config.fetch)?;

    let outcome = pipeline::run(&fetcher, &staging, &urls, &selection).await;
    log::debug!(
        "Batch finished: {} processed, {} skipped, {} failed",
        outcome.processed,
        outcome.skipped,
        outcome.failures
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_dir_flag_overrides_config() {
        let cli = Cli::try_parse_from([
            "cloudsnoop",
            "--url",
            "https://example.com/a.txt",
            "--staging-dir",
            "work",
        ])
        .unwrap();

        let config = apply_overrides(&cli, Config::default());
        assert_eq!(config.staging.dir, "work");
    }

    #[test]
    fn test_staging_dir_defaults_to_dump() {
        let cli =
            Cli::try_parse_from(["cloudsnoop", "--url", "https://example.com/a.txt"]).unwrap();

        let config = apply_overrides(&cli, Config::default());
        assert_eq!(config.staging.dir, "dump");
    }

    #[test]
    fn test_exactly_one_input_source_required() {
        assert!(Cli::try_parse_from(["cloudsnoop"]).is_err());
        assert!(
            Cli::try_parse_from(["cloudsnoop", "--url", "https://a", "--file", "urls.txt"])
                .is_err()
        );
    }
}
