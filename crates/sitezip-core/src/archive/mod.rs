//! Archive assembly with directory and file deduplication.
//!
//! [`ArchiveState`] remembers which directory and file entries a run has
//! already emitted. [`ensure_directories`] emits every missing ancestor of a
//! path, parents first; [`write_file`] emits a file entry at most once per
//! path. Both take the state and the [`EntrySink`] explicitly so nothing is
//! shared beyond the run that owns them.

mod builder;
mod error;
mod sink;

use std::collections::HashSet;

pub use builder::{ArchiveBuilder, ArchiveSummary};
pub use error::ArchiveError;
pub use sink::{ArchiveOptions, EntrySink, ZipSink};

/// Paths already emitted during one run.
#[derive(Debug, Clone, Default)]
pub struct ArchiveState {
    directories: HashSet<String>,
    files: HashSet<String>,
}

impl ArchiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted directory paths, each ending in `/`.
    pub fn directories(&self) -> &HashSet<String> {
        &self.directories
    }

    pub fn files(&self) -> &HashSet<String> {
        &self.files
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }
}

/// Result of [`write_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The path was written earlier in this run; nothing was emitted.
    Skipped,
}

/// Emits a directory entry for every ancestor of `path` not yet emitted.
///
/// The directory part is everything before the last `/`. Prefixes are built
/// left to right (`a/`, `a/b/`, ...) so parents always precede children.
/// Returns how many directory entries were added.
pub fn ensure_directories<S: EntrySink + ?Sized>(
    state: &mut ArchiveState,
    sink: &mut S,
    path: &str,
) -> Result<usize, ArchiveError> {
    let Some((dirs, _)) = path.rsplit_once('/') else {
        return Ok(0);
    };

    let mut current = String::with_capacity(dirs.len() + 1);
    let mut added = 0;
    for segment in dirs.split('/').filter(|s| !s.is_empty()) {
        current.push_str(segment);
        current.push('/');
        if state.directories.contains(&current) {
            continue;
        }
        tracing::debug!("adding directory entry: {current}");
        sink.add_directory(&current)?;
        state.directories.insert(current.clone());
        added += 1;
    }
    Ok(added)
}

/// Writes a file entry once per path; repeated paths are skipped silently.
pub fn write_file<S: EntrySink + ?Sized>(
    state: &mut ArchiveState,
    sink: &mut S,
    path: &str,
    payload: &[u8],
) -> Result<WriteOutcome, ArchiveError> {
    if state.files.contains(path) {
        tracing::debug!("skipping duplicate file entry: {path}");
        return Ok(WriteOutcome::Skipped);
    }
    ensure_directories(state, sink, path)?;
    state.files.insert(path.to_string());
    tracing::debug!(bytes = payload.len(), "adding file entry: {path}");
    sink.add_file(path, payload)?;
    Ok(WriteOutcome::Written)
}
