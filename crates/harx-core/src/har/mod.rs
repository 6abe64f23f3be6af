//! HAR (HTTP Archive) document model and loader.

mod load;
mod parse;

pub use load::{load_har, parse_har};
pub use parse::{
    Har, HarContent, HarCookie, HarCreator, HarEntry, HarHeader, HarInitiator, HarLog,
    HarRequest, HarResponse, HarTimings,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[test]
    fn load_har_reads_entries_in_order() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "creator": { "name": "WebInspector", "version": "537.36" },
                "pages": [],
                "entries": [
                    {
                        "request": { "method": "GET", "url": "https://example.com/app.js", "headers": [] },
                        "response": {
                            "status": 200,
                            "content": { "size": 12, "mimeType": "text/javascript", "text": "console.log()" }
                        }
                    },
                    {
                        "request": { "url": "https://example.com/logo.png" },
                        "response": {
                            "status": 200,
                            "content": { "size": 4, "mimeType": "image/png", "text": "QUJDRA==", "encoding": "base64" }
                        }
                    }
                ]
            }
        }"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();
        let doc = load_har(f.path()).unwrap();
        assert_eq!(doc.log.version, "1.2");
        assert_eq!(doc.log.creator.name, "WebInspector");
        assert_eq!(doc.log.entries.len(), 2);
        assert_eq!(doc.log.entries[0].request.url, "https://example.com/app.js");
        assert_eq!(doc.log.entries[1].response.content.encoding, "base64");
        assert_eq!(doc.log.entries[1].response.content.mime_type, "image/png");
    }

    #[test]
    fn parse_har_ignores_unknown_and_chrome_fields() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "startedDateTime": "2024-01-01T00:00:00.000Z",
                        "time": 12.5,
                        "_initiator": { "type": "parser", "url": "https://example.com/" },
                        "_priority": "High",
                        "_resourceType": "script",
                        "somethingNew": { "nested": [1, 2, 3] },
                        "request": {
                            "url": "https://example.com/a.js",
                            "cookies": [ { "name": "sid", "value": "1", "expires": null, "httpOnly": true, "secure": true } ],
                            "headersSize": -1,
                            "bodySize": 0
                        },
                        "response": {
                            "status": 200,
                            "_transferSize": 300,
                            "content": { "size": 1, "text": "x" }
                        },
                        "cache": {},
                        "timings": { "blocked": 1.0, "dns": -1, "wait": 3.25, "_blocked_queueing": 0.5 }
                    }
                ]
            }
        }"#;
        let doc = parse_har(Path::new("inline.har"), har.as_bytes()).unwrap();
        let entry = &doc.log.entries[0];
        assert_eq!(entry.initiator.kind, "parser");
        assert_eq!(entry.resource_type, "script");
        assert_eq!(entry.response.transfer_size, 300);
        assert!(entry.request.cookies[0].http_only);
        assert!((entry.timings.blocked_queueing - 0.5).abs() < 1e-9);
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let har = r#"{"log":{"entries":[{"request":{"url":"https://example.com/"},"response":{}}]}}"#;
        let doc = parse_har(Path::new("inline.har"), har.as_bytes()).unwrap();
        let content = &doc.log.entries[0].response.content;
        assert_eq!(content.size, 0);
        assert!(content.text.is_empty());
        assert!(content.encoding.is_empty());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let har = r#"{"log":{"version":null,"creator":null,"entries":[{
            "startedDateTime": null,
            "time": null,
            "request": { "url": "https://x.test/c.js", "headers": null, "cookies": null },
            "response": {
                "status": null,
                "redirectURL": null,
                "content": { "size": 1, "text": "a", "encoding": null, "mimeType": null }
            },
            "timings": { "dns": null },
            "_initiator": null
        }]}}"#;
        let doc = parse_har(Path::new("nulls.har"), har.as_bytes()).unwrap();
        assert!(doc.log.version.is_empty());
        let entry = &doc.log.entries[0];
        assert!(entry.request.headers.is_empty());
        assert_eq!(entry.response.status, 0);
        assert_eq!(entry.response.content.size, 1);
        assert_eq!(entry.response.content.text, "a");
        assert!(entry.response.content.encoding.is_empty());
        assert!(entry.response.content.mime_type.is_empty());
        assert_eq!(entry.timings.dns, 0.0);
    }

    #[test]
    fn header_without_value_parses() {
        let har = r#"{"log":{"entries":[{
            "request": { "url": "https://x.test/a", "headers": [{"name":"x"}, {"value":"y"}] },
            "response": { "headers": [{"name":"Content-Type","value":null}] }
        }]}}"#;
        let doc = parse_har(Path::new("headers.har"), har.as_bytes()).unwrap();
        let entry = &doc.log.entries[0];
        assert_eq!(entry.request.headers[0].name, "x");
        assert!(entry.request.headers[0].value.is_empty());
        assert!(entry.request.headers[1].name.is_empty());
        assert!(entry.response.headers[0].value.is_empty());
    }

    #[test]
    fn parse_har_invalid_json_err() {
        let err = parse_har(Path::new("broken.har"), b"{\"log\": [").unwrap_err();
        assert_eq!(err.kind(), "json_decode");
    }

    #[test]
    fn parse_har_wrong_shape_err() {
        let err = parse_har(
            Path::new("shape.har"),
            br#"{"log":{"entries":[{"response":{"content":{"size":"big"}}}]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "json_decode");
    }

    #[test]
    fn load_har_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_har(&dir.path().join("nope.har")).unwrap_err();
        assert_eq!(err.kind(), "file_open");
    }
}
