//! Response body selection and decoding.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use std::borrow::Cow;

use crate::har::{HarContent, HarEntry};

/// `content.encoding` value for base64 bodies.
pub const BASE64_ENCODING: &str = "base64";

/// True if the entry recorded a response body (`content.size != 0`).
pub fn has_content(entry: &HarEntry) -> bool {
    entry.response.content.size != 0
}

/// Decodes the recorded body into raw bytes.
///
/// Base64 bodies use the standard alphabet with padding. Any other encoding
/// value (usually absent) means `text` is the body itself.
pub fn decode_content(content: &HarContent) -> Result<Cow<'_, [u8]>, base64::DecodeError> {
    if content.encoding == BASE64_ENCODING {
        BASE64_STANDARD.decode(&content.text).map(Cow::Owned)
    } else {
        Ok(Cow::Borrowed(content.text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(size: i64, text: &str, encoding: &str) -> HarContent {
        HarContent {
            size,
            mime_type: String::new(),
            text: text.to_string(),
            encoding: encoding.to_string(),
        }
    }

    #[test]
    fn has_content_checks_size_only() {
        let mut entry = HarEntry::default();
        assert!(!has_content(&entry));
        entry.response.content = content(0, "body is ignored", "");
        assert!(!has_content(&entry));
        entry.response.content = content(5, "", "");
        assert!(has_content(&entry));
        entry.response.content = content(-1, "", "");
        assert!(has_content(&entry));
    }

    #[test]
    fn plain_text_is_verbatim() {
        let c = content(9, "héllo\n{}", "");
        assert_eq!(decode_content(&c).unwrap().as_ref(), "héllo\n{}".as_bytes());
    }

    #[test]
    fn unknown_encoding_is_verbatim() {
        let c = content(8, "QUJDRA==", "gzip");
        assert_eq!(decode_content(&c).unwrap().as_ref(), b"QUJDRA==");
    }

    #[test]
    fn base64_is_decoded() {
        let c = content(4, "QUJDRA==", "base64");
        assert_eq!(decode_content(&c).unwrap().as_ref(), b"ABCD");
    }

    #[test]
    fn base64_binary_reencodes_to_same_text() {
        let text = "iVBORw0KGgoAAAANSUhEUg==";
        let c = content(16, text, "base64");
        let bytes = decode_content(&c).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
        assert_eq!(BASE64_STANDARD.encode(&bytes), text);
    }

    #[test]
    fn malformed_base64_fails() {
        assert!(decode_content(&content(3, "not*base64", "base64")).is_err());
        assert!(decode_content(&content(3, "QUJDRA", "base64")).is_err());
    }
}
