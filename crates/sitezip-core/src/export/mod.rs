//! Export run: corpus query → destination → archive.
//!
//! One run owns one [`ArchiveBuilder`] from creation to finalization and is
//! fully synchronous. Per-exchange URL problems degrade to the root index
//! path; destination and entry write failures abort the run. A partially
//! written archive is left in place for the caller to deal with.

mod destination;
mod plan;

use anyhow::Result;
use std::io::{Seek, Write};
use std::path::PathBuf;

use crate::archive::{ArchiveBuilder, ArchiveError, ArchiveOptions, ArchiveSummary};
use crate::exchange::{Exchange, ExchangeSource};
use crate::site_path::{resolve, BaseContext};

pub use destination::{ensure_zip_extension, ZIP_EXTENSION};
pub use plan::{plan, PlanAction, PlannedEntry};

/// What a finished archive contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub summary: ArchiveSummary,
    /// Exchanges ignored because no response was captured.
    pub without_response: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The corpus has nothing under the base URL; no destination was asked for.
    NoMatches,
    /// The destination prompt was dismissed; nothing was written.
    Cancelled,
    Written(ExportReport),
}

/// Writes every exchange that has a response into `builder`.
///
/// Returns the number of exchanges skipped for lacking a response.
pub fn build_archive<'a, W, I>(
    base: &BaseContext,
    exchanges: I,
    builder: &mut ArchiveBuilder<W>,
) -> Result<usize, ArchiveError>
where
    W: Write + Seek,
    I: IntoIterator<Item = &'a Exchange>,
{
    let mut without_response = 0;
    for exchange in exchanges {
        let Some(body) = exchange.response_body.as_deref() else {
            tracing::debug!("no response for {}, skipping", exchange.request_url);
            without_response += 1;
            continue;
        };
        let path = resolve(base, &exchange.request_url, &exchange.response_headers);
        builder.write_file(path.as_str(), body)?;
    }
    Ok(without_response)
}

/// Exports everything under `base` from `source` into a zip archive.
///
/// `choose_destination` is only called when at least one exchange matched;
/// returning `None` abandons the run. The chosen path always gets a `.zip`
/// extension.
pub fn export_site<S, F>(
    base: &BaseContext,
    source: &S,
    choose_destination: F,
    options: ArchiveOptions,
) -> Result<ExportOutcome>
where
    S: ExchangeSource + ?Sized,
    F: FnOnce() -> Result<Option<PathBuf>>,
{
    let exchanges = source.matching_exchanges(base.base_url())?;
    if exchanges.is_empty() {
        tracing::info!("no items found for URL: {}", base.base_url());
        return Ok(ExportOutcome::NoMatches);
    }
    tracing::info!(
        matched = exchanges.len(),
        root = base.root_folder(),
        "exporting {}",
        base.base_url()
    );

    let Some(chosen) = choose_destination()? else {
        tracing::info!("destination selection cancelled");
        return Ok(ExportOutcome::Cancelled);
    };
    let path = ensure_zip_extension(&chosen);

    let mut builder = ArchiveBuilder::create(&path, options)?;
    let without_response = build_archive(base, &exchanges, &mut builder)?;
    let (_file, summary) = builder.finish()?;

    tracing::info!(
        files = summary.files,
        directories = summary.directories,
        duplicates = summary.skipped_duplicates,
        "zipped file created: {}",
        path.display()
    );

    Ok(ExportOutcome::Written(ExportReport {
        path,
        summary,
        without_response,
    }))
}
