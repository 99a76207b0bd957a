//! Mapping of exchange URLs to archive paths.
//!
//! Every exchange lands under a single root folder named after the base URL's
//! last path segment (or the host when the base URL has no path). The part of
//! the exchange path below the base path is kept as-is; directory-like URLs
//! become `index.html` and extension-less leaves get one from `Content-Type`.
//! Pure and deterministic: no I/O, no state.

mod extension;
mod sanitize;

use std::fmt;

use url::Url;

use crate::exchange::{find_header, Exchange, Header};

pub use extension::{content_type_extension, FALLBACK_EXTENSION};
pub use sanitize::sanitize_segment;

/// Leaf name for directory-like URLs (path ending in `/`).
pub const INDEX_FILE: &str = "index.html";

/// Root folder used when neither the base path nor any host yields a name.
const DEFAULT_ROOT_FOLDER: &str = "site";

/// Slash-separated archive path rooted under the root folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-run context derived from the triggering exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseContext {
    base_url: String,
    /// `None` when the base URL does not parse; every exchange then maps to
    /// the root folder's index.
    base_path: Option<String>,
    root_folder: String,
}

impl BaseContext {
    /// Builds the context from a base URL and the triggering request's host.
    pub fn new(base_url: &str, host: Option<&str>) -> Self {
        let parsed = Url::parse(base_url).ok();
        if parsed.is_none() {
            tracing::warn!(url = base_url, "base URL does not parse");
        }
        Self {
            base_url: base_url.to_string(),
            base_path: parsed.as_ref().map(|u| u.path().to_string()),
            root_folder: root_folder_name(base_url, host),
        }
    }

    /// Builds the context from the exchange the user triggered the export on.
    ///
    /// The host comes from the request's `Host` header, or `:authority` for
    /// HTTP/2 captures.
    pub fn from_exchange(exchange: &Exchange) -> Self {
        let host = find_header(&exchange.request_headers, "Host")
            .or_else(|| find_header(&exchange.request_headers, ":authority"));
        Self::new(&exchange.request_url, host)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn root_folder(&self) -> &str {
        &self.root_folder
    }
}

/// Root folder name for a base URL.
///
/// Last non-empty segment of the URL path; when the path has none, the
/// request host, then the URL's own authority, then `site`.
pub fn root_folder_name(base_url: &str, host: Option<&str>) -> String {
    let parsed = Url::parse(base_url).ok();

    let from_path = parsed
        .as_ref()
        .and_then(|u| u.path().split('/').filter(|s| !s.is_empty()).last())
        .map(str::to_string);

    let from_url_host = || {
        parsed.as_ref().and_then(|u| {
            let host = u.host_str()?;
            Some(match u.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            })
        })
    };

    let name = from_path
        .or_else(|| {
            host.map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
        })
        .or_else(from_url_host)
        .map(|n| sanitize_segment(&n))
        .filter(|n| !n.is_empty() && n != "." && n != "..");

    name.unwrap_or_else(|| DEFAULT_ROOT_FOLDER.to_string())
}

/// Resolves the archive path for one exchange.
///
/// Query strings and fragments never reach the path. An exchange whose path
/// does not start with the base path is still archived, rooted under its full
/// path. Unparsable URLs map to the root folder's `index.html` instead of
/// failing the batch.
pub fn resolve(
    base: &BaseContext,
    exchange_url: &str,
    response_headers: &[Header],
) -> RelativePath {
    let relative = relative_portion(base.base_path.as_deref(), exchange_url);
    let mut path = join_under_root(&base.root_folder, &relative);

    if path.ends_with('/') {
        path.push_str(INDEX_FILE);
    } else if !last_segment(&path).contains('.') {
        path.push_str(&content_type_extension(response_headers));
    }

    RelativePath(path)
}

fn relative_portion(base_path: Option<&str>, exchange_url: &str) -> String {
    let Some(base_path) = base_path else {
        return String::new();
    };
    match Url::parse(exchange_url) {
        Ok(url) => {
            let path = url.path();
            path.strip_prefix(base_path).unwrap_or(path).to_string()
        }
        Err(err) => {
            tracing::warn!(url = exchange_url, error = %err, "unparsable exchange URL, mapping to archive root");
            String::new()
        }
    }
}

/// `root/relative` with every run of `/` collapsed to one.
fn join_under_root(root: &str, relative: &str) -> String {
    let mut out = String::with_capacity(root.len() + relative.len() + 1);
    out.push_str(root);
    out.push('/');
    for c in relative.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
