//! Per-run summary of the extraction pipeline.

use std::error::Error as _;
use std::fmt;
use std::path::PathBuf;

use crate::error::ExtractError;

/// A body written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Result of pushing one entry through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The decoded body was written.
    Written(WrittenFile),
    /// `content.size` was zero.
    Empty,
    /// The URL had no filename and the policy says skip.
    Skipped,
}

/// An entry that failed, with its position in the log.
#[derive(Debug)]
pub struct EntryFailure {
    pub index: usize,
    pub url: String,
    pub error: ExtractError,
}

impl fmt::Display for EntryFailure {
    /// One line: entry position, URL, error and its source chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{} ({}): {}", self.index, self.url, self.error)?;
        let mut source = self.error.source();
        while let Some(cause) = source {
            write!(f, ": {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    pub written: Vec<WrittenFile>,
    /// Entries with `content.size == 0`.
    pub empty: usize,
    /// Entries left out by the empty-filename policy.
    pub skipped: usize,
    pub failures: Vec<EntryFailure>,
    /// True if the run stopped at a failure before reaching the last entry.
    pub aborted: bool,
}

impl ExtractReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Written(file) => self.written.push(file),
            EntryOutcome::Empty => self.empty += 1,
            EntryOutcome::Skipped => self.skipped += 1,
        }
    }
}

impl fmt::Display for ExtractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) written, {} empty, {} skipped, {} failed",
            self.written.len(),
            self.empty,
            self.skipped,
            self.failures.len()
        )?;
        if self.aborted {
            write!(f, " (aborted)")?;
        }
        Ok(())
    }
}
