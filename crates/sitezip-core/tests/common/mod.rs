//! Helpers for reading back produced archives.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

/// One archive entry as stored: name, directory flag, payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub name: String,
    pub is_dir: bool,
    pub body: Vec<u8>,
}

/// Reads every entry of the zip at `path` in central-directory order.
pub fn read_entries(path: &Path) -> Vec<StoredEntry> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut out = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut body = Vec::new();
        entry.read_to_end(&mut body).unwrap();
        out.push(StoredEntry {
            name: entry.name().to_string(),
            is_dir: entry.is_dir(),
            body,
        });
    }
    out
}

pub fn names(entries: &[StoredEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}
