//! Destination path handling.

use std::path::{Path, PathBuf};

/// Conventional archive extension.
pub const ZIP_EXTENSION: &str = ".zip";

/// Appends `.zip` unless the file name already ends with it (any case).
pub fn ensure_zip_extension(path: &Path) -> PathBuf {
    let has_zip = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with(ZIP_EXTENSION))
        .unwrap_or(false);
    if has_zip {
        return path.to_path_buf();
    }
    let mut o = path.as_os_str().to_owned();
    o.push(ZIP_EXTENSION);
    PathBuf::from(o)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_when_missing() {
        assert_eq!(
            ensure_zip_extension(Path::new("/tmp/site")),
            PathBuf::from("/tmp/site.zip")
        );
        assert_eq!(
            ensure_zip_extension(Path::new("mirror.tar")),
            PathBuf::from("mirror.tar.zip")
        );
    }

    #[test]
    fn keeps_existing_any_case() {
        assert_eq!(
            ensure_zip_extension(Path::new("/tmp/site.zip")),
            PathBuf::from("/tmp/site.zip")
        );
        assert_eq!(
            ensure_zip_extension(Path::new("SITE.ZIP")),
            PathBuf::from("SITE.ZIP")
        );
    }
}
