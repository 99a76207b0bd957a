//! Entry sinks: where directory and file entries physically go.

use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::{Compression, SitezipConfig};

use super::error::ArchiveError;

/// Receives archive entries in emission order.
pub trait EntrySink {
    /// Adds an empty directory entry; `path` ends with `/`.
    fn add_directory(&mut self, path: &str) -> Result<(), ArchiveError>;
    /// Adds a file entry holding `payload` verbatim.
    fn add_file(&mut self, path: &str, payload: &[u8]) -> Result<(), ArchiveError>;
}

/// How file entries are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub compression: Compression,
    /// Unix mode bits recorded for file entries.
    pub file_permissions: u32,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflated,
            file_permissions: 0o644,
        }
    }
}

impl From<&SitezipConfig> for ArchiveOptions {
    fn from(cfg: &SitezipConfig) -> Self {
        Self {
            compression: cfg.compression,
            file_permissions: cfg.file_permissions,
        }
    }
}

const DIRECTORY_PERMISSIONS: u32 = 0o755;

/// Zip-backed sink.
pub struct ZipSink<W: Write + Seek> {
    writer: ZipWriter<W>,
    file_options: SimpleFileOptions,
    dir_options: SimpleFileOptions,
}

impl<W: Write + Seek> ZipSink<W> {
    pub fn new(inner: W, options: ArchiveOptions) -> Self {
        let method = match options.compression {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        };
        Self {
            writer: ZipWriter::new(inner),
            file_options: SimpleFileOptions::default()
                .compression_method(method)
                .unix_permissions(options.file_permissions),
            dir_options: SimpleFileOptions::default().unix_permissions(DIRECTORY_PERMISSIONS),
        }
    }

    /// Writes the central directory and flushes; returns the underlying writer.
    pub fn finish(self) -> Result<W, ArchiveError> {
        let mut inner = self
            .writer
            .finish()
            .map_err(|source| ArchiveError::Finish { source })?;
        inner.flush().map_err(|e| ArchiveError::Finish { source: e.into() })?;
        Ok(inner)
    }
}

impl<W: Write + Seek> EntrySink for ZipSink<W> {
    fn add_directory(&mut self, path: &str) -> Result<(), ArchiveError> {
        self.writer
            .add_directory(path, self.dir_options)
            .map_err(|e| ArchiveError::entry(path, e))
    }

    fn add_file(&mut self, path: &str, payload: &[u8]) -> Result<(), ArchiveError> {
        self.writer
            .start_file(path, self.file_options)
            .map_err(|e| ArchiveError::entry(path, e))?;
        self.writer
            .write_all(payload)
            .map_err(|e| ArchiveError::entry(path, e))
    }
}
