//! CLI subcommand implementations.

pub mod analyze;
pub mod location;
pub mod search;
pub mod summary;
pub mod top;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use fundscope_lib::{
    FileSource, FundscopeError, HttpSource, ParsedBatch, RecordStore, Settings,
};

/// Where the weball text comes from.
pub enum Input {
    File(FileSource),
    Http(HttpSource),
}

impl Input {
    pub fn from_args(file: Option<PathBuf>, url: Option<&str>, settings: &Settings) -> Result<Self> {
        match (file, url) {
            (Some(path), None) => Ok(Input::File(FileSource::new(path))),
            (None, Some(url)) => Ok(Input::Http(HttpSource::new(
                url,
                settings.http_timeout,
                settings.retry,
            )?)),
            (Some(_), Some(_)) => bail!("pass either --file or --url, not both"),
            (None, None) => bail!("no input: pass --file <path> or --url <url> (or set FUNDSCOPE_FILE)"),
        }
    }

    pub async fn load(&self, store: &RecordStore) -> Result<Arc<ParsedBatch>, FundscopeError> {
        match self {
            Input::File(source) => store.load(source).await,
            Input::Http(source) => store.load(source).await,
        }
    }
}

/// Prints the skipped-line report to stderr so stdout stays machine-readable.
pub fn report_skipped(batch: &ParsedBatch) {
    let report = &batch.report;
    if report.has_failures() {
        eprintln!(
            "Skipped {} of {} lines (first bad lines: {:?})",
            report.failed, report.lines_read, report.sample_failed_lines
        );
    }
    if !report.duplicate_ids.is_empty() {
        eprintln!(
            "{} candidate IDs appear more than once",
            report.duplicate_ids.len()
        );
    }
}
