//! The extraction pipeline: filter → derive filename → decode → write.
//!
//! [`Extractor`] holds explicit options and never terminates the process.
//! Each entry yields an [`EntryOutcome`] or an [`ExtractError`]; the
//! [`OnError`] mode decides whether the first failure stops the run.

mod report;

pub use report::{EntryFailure, EntryOutcome, ExtractReport, WrittenFile};

use std::path::{Path, PathBuf};

use crate::content::{decode_content, has_content};
use crate::error::ExtractError;
use crate::har::{self, Har, HarEntry};
use crate::storage;
use crate::url_model::{derive_filename, EmptyFilenamePolicy, DEFAULT_FALLBACK_FILENAME};

/// Behavior after an entry fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Stop at the first failing entry. Files already written stay.
    #[default]
    Abort,
    /// Record the failure and go on with the next entry.
    Continue,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub output_dir: PathBuf,
    pub on_error: OnError,
    pub empty_filename: EmptyFilenamePolicy,
    pub fallback_filename: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(crate::config::DEFAULT_OUTPUT_DIR),
            on_error: OnError::default(),
            empty_filename: EmptyFilenamePolicy::default(),
            fallback_filename: DEFAULT_FALLBACK_FILENAME.to_string(),
        }
    }
}

pub struct Extractor {
    opts: ExtractOptions,
}

impl Extractor {
    pub fn new(opts: ExtractOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.opts
    }

    /// Prepares the output directory, loads `har_path` and extracts it.
    ///
    /// Only a load failure is returned as `Err`; entry failures are in the report.
    pub fn run(&self, har_path: &Path) -> Result<ExtractReport, ExtractError> {
        storage::ensure_output_dir(&self.opts.output_dir);
        let doc = har::load_har(har_path)?;
        Ok(self.extract_document(&doc))
    }

    /// Pushes every entry of `doc` through the pipeline in log order.
    pub fn extract_document(&self, doc: &Har) -> ExtractReport {
        let entries = &doc.log.entries;
        let mut report = ExtractReport::default();
        for (index, entry) in entries.iter().enumerate() {
            match self.process_entry(entry) {
                Ok(outcome) => report.record(outcome),
                Err(error) => {
                    tracing::debug!(
                        index,
                        url = %entry.request.url,
                        kind = error.kind(),
                        "entry failed: {}",
                        error
                    );
                    report.failures.push(EntryFailure {
                        index,
                        url: entry.request.url.clone(),
                        error,
                    });
                    if self.opts.on_error == OnError::Abort {
                        report.aborted = index + 1 < entries.len();
                        break;
                    }
                }
            }
        }
        tracing::info!(
            written = report.written.len(),
            empty = report.empty,
            skipped = report.skipped,
            failed = report.failures.len(),
            "extraction finished"
        );
        report
    }

    /// Runs one entry through filter, filename derivation, decoding and write.
    pub fn process_entry(&self, entry: &HarEntry) -> Result<EntryOutcome, ExtractError> {
        if !has_content(entry) {
            return Ok(EntryOutcome::Empty);
        }
        let url = &entry.request.url;
        let filename = match derive_filename(
            url,
            self.opts.empty_filename,
            &self.opts.fallback_filename,
        )? {
            Some(name) => name,
            None => {
                tracing::debug!(url = %url, "no filename in URL path, skipping");
                return Ok(EntryOutcome::Skipped);
            }
        };
        let content = &entry.response.content;
        let data = decode_content(content).map_err(|source| ExtractError::Base64Decode {
            url: url.clone(),
            source,
        })?;
        let path = storage::write_content(&self.opts.output_dir, &filename, &data)?;
        tracing::debug!(
            url = %url,
            path = %path.display(),
            bytes = data.len(),
            mime = %content.mime_type,
            "wrote response body"
        );
        Ok(EntryOutcome::Written(WrittenFile {
            path,
            bytes: data.len(),
        }))
    }
}
