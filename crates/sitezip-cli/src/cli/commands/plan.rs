//! `sitezip plan <har> --base-url <url>` – dry run of an export.

use anyhow::Result;
use sitezip_core::exchange::ExchangeSource;
use sitezip_core::export::{plan, PlanAction};
use sitezip_core::har::HarSource;
use std::path::Path;

use super::base_context;

pub fn run_plan(har: &Path, base_url: &str) -> Result<()> {
    let source = HarSource::open(har)?;
    let base = base_context(&source, base_url);
    let exchanges = source.matching_exchanges(base.base_url())?;
    if exchanges.is_empty() {
        println!("No items found for URL: {base_url}");
        return Ok(());
    }

    println!("Root folder: {}", base.root_folder());
    println!("{:<10} {:<48} {}", "ACTION", "PATH", "URL");
    for entry in plan(&base, &exchanges) {
        let action = match entry.action {
            PlanAction::Write => "write",
            PlanAction::Duplicate => "duplicate",
            PlanAction::NoResponse => "skip",
        };
        let path = entry
            .path
            .as_ref()
            .map(|p| p.as_str())
            .unwrap_or("-");
        println!("{:<10} {:<48} {}", action, path, entry.url);
    }
    Ok(())
}
