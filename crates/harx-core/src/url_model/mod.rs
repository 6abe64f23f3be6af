//! URL modeling and filename derivation.
//!
//! The output filename for an entry is the last segment of its request URL
//! path. No sanitization is applied. What happens when that segment is empty
//! (the path ends in `/`) is decided by [`EmptyFilenamePolicy`].

mod path;

pub use path::{filename_from_url, path_tail};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;

/// Default name for entries whose URL path ends in `/`.
pub const DEFAULT_FALLBACK_FILENAME: &str = "index.html";

/// What to do when a request URL path has no final segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFilenamePolicy {
    /// Write the body under a fallback name.
    #[default]
    Fallback,
    /// Leave the entry out without failing.
    Skip,
    /// Fail the entry with [`ExtractError::EmptyFilename`].
    Error,
}

impl FromStr for EmptyFilenamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fallback" => Ok(EmptyFilenamePolicy::Fallback),
            "skip" => Ok(EmptyFilenamePolicy::Skip),
            "error" => Ok(EmptyFilenamePolicy::Error),
            other => Err(format!(
                "unknown empty-filename policy {other:?} (expected fallback, skip or error)"
            )),
        }
    }
}

impl fmt::Display for EmptyFilenamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmptyFilenamePolicy::Fallback => "fallback",
            EmptyFilenamePolicy::Skip => "skip",
            EmptyFilenamePolicy::Error => "error",
        })
    }
}

/// Derives the output filename for `url` under `policy`.
///
/// Returns `Ok(None)` when the entry should be skipped.
pub fn derive_filename(
    url: &str,
    policy: EmptyFilenamePolicy,
    fallback: &str,
) -> Result<Option<String>, ExtractError> {
    let name = filename_from_url(url)?;
    if !name.is_empty() {
        return Ok(Some(name));
    }
    match policy {
        EmptyFilenamePolicy::Fallback => Ok(Some(fallback.to_string())),
        EmptyFilenamePolicy::Skip => Ok(None),
        EmptyFilenamePolicy::Error => Err(ExtractError::EmptyFilename {
            url: url.to_string(),
        }),
    }
}
