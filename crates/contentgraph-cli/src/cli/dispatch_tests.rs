//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Required arguments are enforced per command
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Global verbosity is counted from any position

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{build_cli, dump_command, filter_command};

#[test]
fn dump_extracts_params() {
    let m = dump_command()
        .try_get_matches_from([
            "dump",
            "types.json",
            "--only",
            "Article,ArticleQueries",
            "--only",
            "Author",
            "--provenance",
            "--config",
            "cg.json",
            "--strict",
            "--color",
            "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.schema_path, PathBuf::from("types.json"));
    assert_eq!(params.only, ["Article", "ArticleQueries", "Author"]);
    assert!(params.provenance);
    assert_eq!(params.config, Some(PathBuf::from("cg.json")));
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.schema_path, PathBuf::from("-"));
    assert!(params.only.is_empty());
    assert!(!params.provenance);
    assert!(!params.strict);
    assert_eq!(params.config, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_requires_schema_path() {
    let result = dump_command().try_get_matches_from(["dump"]);
    assert!(result.is_err());
}

#[test]
fn dump_rejects_unknown_color() {
    let result = dump_command().try_get_matches_from(["dump", "types.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn filter_extracts_params() {
    let m = filter_command()
        .try_get_matches_from([
            "filter",
            "types.json",
            "-u",
            "api::article.article",
            "-f",
            r#"{"title":{"eq":"x"}}"#,
            "--compact",
        ])
        .unwrap();
    let params = FilterParams::from_matches(&m);

    assert_eq!(params.schema_path, PathBuf::from("types.json"));
    assert_eq!(params.uid, "api::article.article");
    assert_eq!(params.filter, r#"{"title":{"eq":"x"}}"#);
    assert!(params.compact);
    assert!(!params.strict);
}

#[test]
fn filter_requires_uid_and_filter() {
    let result = filter_command().try_get_matches_from(["filter", "types.json", "-f", "{}"]);
    assert!(result.is_err(), "missing --uid should be rejected");

    let result =
        filter_command().try_get_matches_from(["filter", "types.json", "-u", "api::a.a"]);
    assert!(result.is_err(), "missing --filter should be rejected");
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["contentgraph", "dump", "types.json", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);

    let m = build_cli()
        .try_get_matches_from(["contentgraph", "-v", "dump", "types.json"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 1);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["contentgraph"]);
    assert!(result.is_err());
}
