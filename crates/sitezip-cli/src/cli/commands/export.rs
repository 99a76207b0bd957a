//! `sitezip export <har> --base-url <url>` – write the site mirror archive.

use anyhow::{Context, Result};
use sitezip_core::archive::ArchiveOptions;
use sitezip_core::config::SitezipConfig;
use sitezip_core::export::{export_site, ExportOutcome};
use sitezip_core::har::HarSource;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::base_context;

pub fn run_export(
    cfg: &SitezipConfig,
    har: &Path,
    base_url: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let source = HarSource::open(har)?;
    let base = base_context(&source, base_url);

    let choose = move || match output {
        Some(path) => Ok(Some(path)),
        None => prompt_destination(),
    };

    match export_site(&base, &source, choose, ArchiveOptions::from(cfg))? {
        ExportOutcome::NoMatches => println!("No items found for URL: {base_url}"),
        ExportOutcome::Cancelled => println!("Export cancelled; no archive written."),
        ExportOutcome::Written(report) => {
            println!("Zipped file created: {}", report.path.display());
            println!(
                "  {} files, {} directories ({} duplicate paths skipped, {} without response)",
                report.summary.files,
                report.summary.directories,
                report.summary.skipped_duplicates,
                report.without_response
            );
        }
    }
    Ok(())
}

/// Asks for the destination on stderr/stdin; an empty answer cancels.
fn prompt_destination() -> Result<Option<PathBuf>> {
    let mut stderr = io::stderr();
    write!(stderr, "Save archive as (empty to cancel): ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read destination from stdin")?;
    Ok(parse_destination(&line))
}

fn parse_destination(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
