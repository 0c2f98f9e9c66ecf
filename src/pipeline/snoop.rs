// src/pipeline/snoop.rs

//! Batch orchestrator.
//!
//! Drives one fetch -> classify -> extract -> scan -> report cycle per URL,
//! sequentially. A failure at fetch or extract skips that URL; the batch
//! always continues.

use std::io::Write;

use crate::models::{ExtractionStrategy, ScanSelection};
use crate::services::{Fetch, extractor, reporter, scanner};
use crate::storage::StagingDir;

/// Summary of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// URLs that entered the pipeline
    pub processed: usize,
    /// Blank input entries skipped before the pipeline
    pub skipped: usize,
    /// URLs that failed at fetch or extract
    pub failures: usize,
}

/// Process every URL in sequence, reporting to standard output.
pub async fn run(
    fetcher: &dyn Fetch,
    staging: &StagingDir,
    urls: &[String],
    selection: &ScanSelection,
) -> BatchOutcome {
    run_with_output(fetcher, staging, urls, selection, &mut std::io::stdout()).await
}

/// Process every URL in sequence, reporting to the given sink.
///
/// Each URL's staged resource is released when its cycle ends, on every exit
/// path. No aggregate summary is written; the outcome is returned for
/// logging and tests.
pub async fn run_with_output(
    fetcher: &dyn Fetch,
    staging: &StagingDir,
    urls: &[String],
    selection: &ScanSelection,
    out: &mut dyn Write,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for raw_url in urls {
        let url = raw_url.trim();
        if url.is_empty() {
            outcome.skipped += 1;
            continue;
        }

        let _ = writeln!(out, "Processing URL: {}", url);
        outcome.processed += 1;

        let resource = match fetcher.fetch(url, staging).await {
            Ok(resource) => resource,
            Err(e) => {
                let _ = writeln!(out, "Failed to download the file: {}", e);
                outcome.failures += 1;
                continue;
            }
        };

        let strategy = ExtractionStrategy::classify(url);
        log::debug!("Classified {} as {:?}", url, strategy);

        let text = match extractor::extract(&resource, strategy) {
            Ok(text) => text,
            Err(e) => {
                let _ = writeln!(out, "Failed to extract text from the file: {}", e);
                outcome.failures += 1;
                continue;
            }
        };

        let results = scanner::scan(&text, selection);
        reporter::write_to(out, &results);
    }

    outcome
}
