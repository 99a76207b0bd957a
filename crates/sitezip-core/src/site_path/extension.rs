//! File extension inference from the response `Content-Type`.

use crate::exchange::Header;

use super::sanitize::sanitize_segment;

/// Extension used when no usable content type is declared.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Derives a file extension (with leading `.`) from response headers.
///
/// Scans headers in order; the first header whose lower-cased name starts with
/// `content-type` and whose value has a non-empty subtype wins. Parameters
/// after `;` are dropped, so `text/html; charset=utf-8` yields `.html`.
/// Falls back to [`FALLBACK_EXTENSION`].
pub fn content_type_extension(headers: &[Header]) -> String {
    headers
        .iter()
        .filter(|h| h.name.to_ascii_lowercase().starts_with("content-type"))
        .find_map(|h| subtype_extension(&h.value))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

fn subtype_extension(value: &str) -> Option<String> {
    let media_type = value.split(';').next().unwrap_or_default();
    let (_, subtype) = media_type.split_once('/')?;
    let subtype = subtype.trim();
    if subtype.is_empty() {
        return None;
    }
    Some(format!(".{}", sanitize_segment(&subtype.to_ascii_lowercase())))
}
