//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_export_with_output() {
    match parse(&[
        "sitezip",
        "export",
        "capture.har",
        "--base-url",
        "https://example.com/app/",
        "--output",
        "/tmp/app.zip",
    ]) {
        CliCommand::Export {
            har,
            base_url,
            output,
        } => {
            assert_eq!(har, Path::new("capture.har"));
            assert_eq!(base_url, "https://example.com/app/");
            assert_eq!(output.as_deref(), Some(Path::new("/tmp/app.zip")));
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_short_flags_prompt_when_no_output() {
    match parse(&["sitezip", "export", "x.har", "-b", "https://example.com"]) {
        CliCommand::Export {
            har,
            base_url,
            output,
        } => {
            assert_eq!(har, Path::new("x.har"));
            assert_eq!(base_url, "https://example.com");
            assert!(output.is_none());
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_requires_base_url() {
    assert!(Cli::try_parse_from(["sitezip", "export", "x.har"]).is_err());
}

#[test]
fn cli_parse_plan() {
    match parse(&["sitezip", "plan", "x.har", "--base-url", "https://example.com/a/"]) {
        CliCommand::Plan { har, base_url } => {
            assert_eq!(har, Path::new("x.har"));
            assert_eq!(base_url, "https://example.com/a/");
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["sitezip", "crawl"]).is_err());
}
