//! HAR 1.2 structures.
//!
//! Only `request.url` and `response.content` drive extraction; the rest is
//! modelled so that captures from browsers deserialize without surprises.
//! Every field has a serde default, `null` reads as the default, and unknown
//! fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root HAR document (top-level wrapper).
#[derive(Debug, Default, Deserialize)]
pub struct Har {
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: HarLog,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: HarCreator,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarCreator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: HarRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: HarResponse,
    #[serde(default)]
    pub cache: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timings: HarTimings,
    #[serde(default, deserialize_with = "null_as_default", rename = "serverIPAddress")]
    pub server_ip_address: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "_initiator")]
    pub initiator: HarInitiator,
    #[serde(default, deserialize_with = "null_as_default", rename = "_priority")]
    pub priority: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "_resourceType")]
    pub resource_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connection: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<HarHeader>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cookies: Vec<HarCookie>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers_size: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_size: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<HarHeader>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cookies: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: HarContent,
    #[serde(default, deserialize_with = "null_as_default", rename = "redirectURL")]
    pub redirect_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers_size: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_size: i64,
    #[serde(default, deserialize_with = "null_as_default", rename = "_transferSize")]
    pub transfer_size: i64,
}

/// Recorded response body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarContent {
    /// Length of the decoded body in bytes; zero means the entry has no body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mime_type: String,
    /// Body text, raw or base64 depending on `encoding`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encoding: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarHeader {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarCookie {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default)]
    pub expires: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secure: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarTimings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocked: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ssl: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connect: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub send: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wait: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub receive: f64,
    #[serde(default, deserialize_with = "null_as_default", rename = "_blocked_queueing")]
    pub blocked_queueing: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarInitiator {
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub kind: String,
}
