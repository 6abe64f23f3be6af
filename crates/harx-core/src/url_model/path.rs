//! Filename extraction from URL path.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::ExtractError;

/// Returns everything after the last `/` of the URL's path.
///
/// The query string and fragment are not part of the path. The path is
/// percent-decoded before splitting, so an encoded `%2F` is a separator too.
/// Invalid UTF-8 after decoding is replaced lossily. A path ending in `/`
/// yields the empty string.
pub fn path_tail(url: &Url) -> String {
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    match path.rfind('/') {
        Some(i) => path[i + 1..].to_string(),
        None => path.into_owned(),
    }
}

/// Parses `url` and returns its path tail (see [`path_tail`]).
pub fn filename_from_url(url: &str) -> Result<String, ExtractError> {
    let parsed = Url::parse(url).map_err(|source| ExtractError::UrlParse {
        url: url.to_string(),
        source,
    })?;
    Ok(path_tail(&parsed))
}
