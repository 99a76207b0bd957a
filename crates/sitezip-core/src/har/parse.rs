//! Minimal HAR 1.2 structures: URLs, headers and response content.

use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    #[serde(default)]
    pub response: Option<HarResponse>,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    /// 0 means the request was sent but no response arrived.
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: Option<HarContent>,
}

#[derive(Debug, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
    /// `"base64"` for binary bodies; absent for plain text.
    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}
