//! Zip archive builder owning the per-run state.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use super::error::ArchiveError;
use super::sink::{ArchiveOptions, ZipSink};
use super::{write_file, ArchiveState, WriteOutcome};

/// Counts reported once the archive is finalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub directories: usize,
    pub files: usize,
    pub skipped_duplicates: usize,
}

/// Single-writer zip builder: one [`ArchiveState`] bound to one destination.
///
/// Dropping the builder without calling [`finish`](Self::finish) closes the
/// destination but leaves an incomplete archive behind.
pub struct ArchiveBuilder<W: Write + Seek> {
    state: ArchiveState,
    sink: ZipSink<W>,
    skipped_duplicates: usize,
}

impl ArchiveBuilder<BufWriter<File>> {
    /// Create (or truncate) the destination file.
    pub fn create(path: &Path, options: ArchiveOptions) -> Result<Self, ArchiveError> {
        let file = File::create(path).map_err(|source| ArchiveError::Destination {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("opened archive destination {}", path.display());
        Ok(Self::new(BufWriter::new(file), options))
    }
}

impl<W: Write + Seek> ArchiveBuilder<W> {
    pub fn new(writer: W, options: ArchiveOptions) -> Self {
        Self {
            state: ArchiveState::new(),
            sink: ZipSink::new(writer, options),
            skipped_duplicates: 0,
        }
    }

    /// Writes `payload` at `path` unless that path was already written.
    pub fn write_file(&mut self, path: &str, payload: &[u8]) -> Result<WriteOutcome, ArchiveError> {
        let outcome = write_file(&mut self.state, &mut self.sink, path, payload)?;
        if outcome == WriteOutcome::Skipped {
            self.skipped_duplicates += 1;
        }
        Ok(outcome)
    }

    pub fn state(&self) -> &ArchiveState {
        &self.state
    }

    /// Finalizes the archive and returns the writer with a summary.
    pub fn finish(self) -> Result<(W, ArchiveSummary), ArchiveError> {
        let summary = ArchiveSummary {
            directories: self.state.directories().len(),
            files: self.state.files().len(),
            skipped_duplicates: self.skipped_duplicates,
        };
        let inner = self.sink.finish()?;
        Ok((inner, summary))
    }
}
