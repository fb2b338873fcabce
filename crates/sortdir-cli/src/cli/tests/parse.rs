//! Tests for flag parsing.

use super::{parse, MethodArg};
use crate::cli::Cli;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_source_only() {
    let cli = parse(&["sortdir", "--source", "/tmp/inbox"]);
    assert_eq!(cli.source, Path::new("/tmp/inbox"));
    assert!(!cli.dry_run);
    assert!(cli.extensions.is_none());
    assert!(cli.method.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_source_is_required() {
    let err = Cli::try_parse_from(["sortdir", "--dry-run"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_parse_dry_run() {
    let cli = parse(&["sortdir", "--source", ".", "--dry-run"]);
    assert!(cli.dry_run);
}

#[test]
fn cli_parse_method_values() {
    let cli = parse(&["sortdir", "--source", ".", "--method", "date"]);
    assert_eq!(cli.method, Some(MethodArg::Date));
    let cli = parse(&["sortdir", "--source", ".", "--method", "extension"]);
    assert_eq!(cli.method, Some(MethodArg::Extension));
}

#[test]
fn cli_parse_method_rejects_unknown() {
    let err = Cli::try_parse_from(["sortdir", "--source", ".", "--method", "size"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn cli_parse_extensions_space_separated() {
    let cli = parse(&["sortdir", "--source", ".", "--extensions", "txt", "JPG"]);
    assert_eq!(
        cli.extensions,
        Some(vec!["txt".to_string(), "JPG".to_string()])
    );
}

#[test]
fn cli_parse_extensions_comma_separated() {
    let cli = parse(&["sortdir", "--extensions", "txt,.md", "--source", "."]);
    assert_eq!(
        cli.extensions,
        Some(vec!["txt".to_string(), ".md".to_string()])
    );
}

#[test]
fn cli_parse_extensions_without_values() {
    let cli = parse(&["sortdir", "--source", ".", "--extensions"]);
    assert_eq!(cli.extensions, Some(vec![]));
}

#[test]
fn cli_parse_config() {
    let cli = parse(&["sortdir", "--source", ".", "--config", "/etc/sortdir.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/sortdir.toml")));
}
