//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn parse_positional_urls() {
    let cli = parse(&[
        "arxpath",
        "https://arxiv.org/pdf/2406.18629v1.pdf",
        "9507001v2",
    ]);
    assert_eq!(cli.urls.len(), 2);
    assert!(cli.file.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.offline);
}

#[test]
fn parse_file_and_output_flags() {
    let cli = parse(&["arxpath", "-f", "links.txt", "-o", "paths.txt"]);
    assert_eq!(cli.file, Some(PathBuf::from("links.txt")));
    assert_eq!(cli.output, Some(PathBuf::from("paths.txt")));
}

#[test]
fn parse_long_flags() {
    let cli = parse(&[
        "arxpath",
        "--file",
        "links.txt",
        "--output",
        "paths.txt",
        "--metadata",
        "snapshot.json",
        "--offline",
    ]);
    assert_eq!(cli.file, Some(PathBuf::from("links.txt")));
    assert_eq!(cli.metadata, Some(PathBuf::from("snapshot.json")));
    assert!(cli.offline);
}

#[test]
fn parse_no_arguments_is_valid() {
    // Input presence is validated by the convert driver, not the parser.
    let cli = parse(&["arxpath"]);
    assert!(cli.urls.is_empty());
}
