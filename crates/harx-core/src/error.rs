//! Error type for the extraction pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a HAR document or extracting one of its entries.
///
/// Messages carry the path or URL involved; the underlying cause is kept as
/// the error source so `{:#}` on an `anyhow::Error` prints the full chain.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The HAR file could not be opened or read.
    #[error("open HAR file \"{}\"", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HAR bytes are not valid JSON or do not match the HAR shape.
    #[error("decode HAR JSON \"{}\"", .path.display())]
    JsonDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The entry's request URL could not be parsed.
    #[error("parse request URL {url:?}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The entry declared base64 content that does not decode.
    #[error("base64-decode response body of {url}")]
    Base64Decode {
        url: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The URL path ends in `/` and the empty-filename policy is `error`.
    #[error("request URL {url} has no filename in its path")]
    EmptyFilename { url: String },

    /// Writing the decoded body to disk failed.
    #[error("write \"{}\"", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Short machine-friendly name of the failure kind (used in logs).
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::FileOpen { .. } => "file_open",
            ExtractError::JsonDecode { .. } => "json_decode",
            ExtractError::UrlParse { .. } => "url_parse",
            ExtractError::Base64Decode { .. } => "base64_decode",
            ExtractError::EmptyFilename { .. } => "empty_filename",
            ExtractError::FileWrite { .. } => "file_write",
        }
    }
}
