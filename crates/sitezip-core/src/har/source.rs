//! HAR file as an exchange corpus.

use anyhow::{Context, Result};
use base64::prelude::*;
use std::path::Path;

use crate::exchange::{Exchange, ExchangeSource, Header};

use super::parse::{HarContent, HarEntry, HarHeader, HarLog};

/// All exchanges of one HAR file, in file order.
#[derive(Debug, Clone, Default)]
pub struct HarSource {
    exchanges: Vec<Exchange>,
}

impl HarSource {
    /// Reads and parses a HAR file.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
        Self::from_json(&bytes).with_context(|| format!("load HAR file: {}", path.display()))
    }

    /// Parses HAR JSON already in memory.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let har: HarLog = serde_json::from_slice(bytes).context("parse HAR JSON")?;
        let exchanges = har
            .log
            .entries
            .into_iter()
            .map(to_exchange)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(entries = exchanges.len(), "loaded HAR corpus");
        Ok(Self { exchanges })
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Last exchange whose request URL is exactly `url`.
    pub fn find_exchange(&self, url: &str) -> Option<&Exchange> {
        self.exchanges.iter().rev().find(|e| e.request_url == url)
    }
}

impl ExchangeSource for HarSource {
    fn matching_exchanges(&self, url_prefix: &str) -> Result<Vec<Exchange>> {
        Ok(self
            .exchanges
            .iter()
            .filter(|e| e.request_url.starts_with(url_prefix))
            .cloned()
            .collect())
    }
}

fn to_exchange(entry: HarEntry) -> Result<Exchange> {
    let request_url = entry.request.url;
    let request_headers = convert_headers(entry.request.headers);

    let (response_headers, response_body) = match entry.response {
        Some(response) if response.status != 0 => {
            let body = decode_body(&request_url, response.content)?;
            (convert_headers(response.headers), Some(body))
        }
        _ => (Vec::new(), None),
    };

    Ok(Exchange {
        request_url,
        request_headers,
        response_headers,
        response_body,
    })
}

fn decode_body(url: &str, content: Option<HarContent>) -> Result<Vec<u8>> {
    let Some(content) = content else {
        return Ok(Vec::new());
    };
    let Some(text) = content.text else {
        return Ok(Vec::new());
    };
    let is_base64 = content
        .encoding
        .as_deref()
        .map(|e| e.eq_ignore_ascii_case("base64"))
        .unwrap_or(false);
    if is_base64 {
        BASE64_STANDARD
            .decode(text.trim())
            .with_context(|| format!("decode base64 body of {url}"))
    } else {
        Ok(text.into_bytes())
    }
}

fn convert_headers(headers: Vec<HarHeader>) -> Vec<Header> {
    headers
        .into_iter()
        .map(|h| Header {
            name: h.name,
            value: h.value,
        })
        .collect()
}
