//! CLI for sitezip.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitezip_core::config;
use std::path::PathBuf;

use commands::{run_export, run_plan};

/// Top-level CLI for sitezip.
#[derive(Debug, Parser)]
#[command(name = "sitezip")]
#[command(about = "sitezip: mirror captured HTTP traffic into a zip archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Archive every captured response under a base URL, laid out like the site.
    Export {
        /// HAR file holding the captured traffic.
        har: PathBuf,

        /// URL whose path becomes the archive root (also the match prefix).
        #[arg(short, long)]
        base_url: String,

        /// Destination archive; `.zip` is appended if missing. Prompts when omitted.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show where each matching exchange would be written, without writing.
    Plan {
        /// HAR file holding the captured traffic.
        har: PathBuf,

        /// URL whose path becomes the archive root (also the match prefix).
        #[arg(short, long)]
        base_url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Export {
                har,
                base_url,
                output,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_export(&cfg, &har, &base_url, output)?;
            }
            CliCommand::Plan { har, base_url } => run_plan(&har, &base_url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
