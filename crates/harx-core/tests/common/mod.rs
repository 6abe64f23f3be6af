//! HAR fixtures for integration tests.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// One entry with the given request URL and response content.
pub fn entry(url: &str, size: i64, text: &str, encoding: Option<&str>) -> Value {
    let mut content = json!({ "size": size, "mimeType": "application/octet-stream", "text": text });
    if let Some(encoding) = encoding {
        content["encoding"] = json!(encoding);
    }
    json!({
        "startedDateTime": "2024-05-01T10:00:00.000Z",
        "time": 42.0,
        "request": { "method": "GET", "url": url, "httpVersion": "HTTP/1.1", "headers": [] },
        "response": { "status": 200, "statusText": "OK", "headers": [], "content": content },
        "cache": {},
        "timings": { "send": 0.1, "wait": 30.0, "receive": 1.2 }
    })
}

/// Writes a HAR document with `entries` to `dir/capture.har`.
pub fn write_har(dir: &Path, entries: Vec<Value>) -> PathBuf {
    let doc = json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "harx-tests", "version": "0" },
            "pages": [],
            "entries": entries
        }
    });
    let path = dir.join("capture.har");
    std::fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
    path
}

/// Sorted file names in `dir`.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
