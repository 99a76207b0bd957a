//! Archive-safe path segment sanitization.

/// Sanitizes a single path segment for use inside an archive entry name.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Leaves everything else (including percent escapes) untouched
pub fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
