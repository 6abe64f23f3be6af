//! Read a HAR file from disk into [`Har`].

use std::path::Path;

use crate::error::ExtractError;

use super::parse::Har;

/// Reads and deserializes the HAR file at `path`.
pub fn load_har(path: &Path) -> Result<Har, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let har = parse_har(path, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        version = %har.log.version,
        creator = %har.log.creator.name,
        entries = har.log.entries.len(),
        "loaded HAR"
    );
    Ok(har)
}

/// Deserializes HAR bytes. `origin` is only used in the error message.
pub fn parse_har(origin: &Path, bytes: &[u8]) -> Result<Har, ExtractError> {
    serde_json::from_slice(bytes).map_err(|source| ExtractError::JsonDecode {
        path: origin.to_path_buf(),
        source,
    })
}
