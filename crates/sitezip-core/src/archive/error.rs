//! Archive write errors. All of them abort the run.

use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The destination file could not be created.
    #[error("cannot create archive {}", .path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a single directory or file entry failed.
    #[error("failed to write archive entry {path}")]
    Entry {
        path: String,
        #[source]
        source: ZipError,
    },

    /// Writing the central directory or flushing the destination failed.
    #[error("failed to finalize archive")]
    Finish {
        #[source]
        source: ZipError,
    },
}

impl ArchiveError {
    pub(crate) fn entry(path: &str, source: impl Into<ZipError>) -> Self {
        ArchiveError::Entry {
            path: path.to_string(),
            source: source.into(),
        }
    }
}
