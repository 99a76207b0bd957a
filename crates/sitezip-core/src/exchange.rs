//! Captured HTTP exchanges and the corpus interface that supplies them.
//!
//! The core never fetches anything itself; it only reads exchanges handed to
//! it by an [`ExchangeSource`] (a HAR file, or an in-memory list in tests).

use anyhow::Result;

/// A single header as captured, name and value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One captured request/response pair. Read-only to the core.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    /// Absolute request URL.
    pub request_url: String,
    /// Request headers in capture order (only `Host` is consulted).
    pub request_headers: Vec<Header>,
    /// Response headers in capture order; names are case-insensitive.
    pub response_headers: Vec<Header>,
    /// Raw response body, or `None` when no response was received.
    pub response_body: Option<Vec<u8>>,
}

impl Exchange {
    /// Exchange with a response body and the given response headers.
    pub fn with_response(
        request_url: impl Into<String>,
        response_headers: Vec<Header>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            request_url: request_url.into(),
            request_headers: Vec::new(),
            response_headers,
            response_body: Some(body.into()),
        }
    }

    /// Exchange whose request never got a response.
    pub fn without_response(request_url: impl Into<String>) -> Self {
        Self {
            request_url: request_url.into(),
            ..Self::default()
        }
    }

    pub fn has_response(&self) -> bool {
        self.response_body.is_some()
    }
}

/// First header named `name` (ASCII case-insensitive).
pub fn find_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

/// Traffic corpus queried by URL prefix.
///
/// Order of the returned exchanges is whatever the corpus holds; callers must
/// not read meaning into it beyond "first processed wins".
pub trait ExchangeSource {
    fn matching_exchanges(&self, url_prefix: &str) -> Result<Vec<Exchange>>;
}

/// In-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    exchanges: Vec<Exchange>,
}

impl MemorySource {
    pub fn new(exchanges: Vec<Exchange>) -> Self {
        Self { exchanges }
    }
}

impl ExchangeSource for MemorySource {
    fn matching_exchanges(&self, url_prefix: &str) -> Result<Vec<Exchange>> {
        Ok(self
            .exchanges
            .iter()
            .filter(|e| e.request_url.starts_with(url_prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_header_is_case_insensitive_first_match() {
        let headers = vec![
            Header::new("content-TYPE", "text/html"),
            Header::new("Content-Type", "application/json"),
        ];
        assert_eq!(find_header(&headers, "Content-Type"), Some("text/html"));
        assert_eq!(find_header(&headers, "Host"), None);
    }

    #[test]
    fn memory_source_filters_by_prefix_in_order() {
        let source = MemorySource::new(vec![
            Exchange::with_response("https://example.com/app/a", vec![], "a"),
            Exchange::with_response("https://example.com/other", vec![], "o"),
            Exchange::without_response("https://example.com/app/b"),
        ]);
        let matched = source
            .matching_exchanges("https://example.com/app/")
            .unwrap();
        let urls: Vec<&str> = matched.iter().map(|e| e.request_url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://example.com/app/a", "https://example.com/app/b"]
        );
        assert!(matched[0].has_response());
        assert!(!matched[1].has_response());
    }

    #[test]
    fn memory_source_empty_when_nothing_matches() {
        let source = MemorySource::new(vec![Exchange::with_response(
            "https://example.com/x",
            vec![],
            "x",
        )]);
        assert!(source
            .matching_exchanges("https://other.example/")
            .unwrap()
            .is_empty());
    }
}
