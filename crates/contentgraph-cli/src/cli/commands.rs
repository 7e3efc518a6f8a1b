//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("contentgraph")
        .about("Compile content-type descriptors into a content-API schema")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(dump_command())
        .subcommand(filter_command())
}

/// Compile and print the schema.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Compile descriptors and print the schema")
        .after_help(
            r#"EXAMPLES:
  contentgraph dump types.json
  contentgraph dump types.json --only Article,ArticleQueries
  contentgraph dump types.json --provenance --color never
  cat types.json | contentgraph dump -"#,
        )
        .arg(schema_path_arg())
        .arg(only_arg())
        .arg(provenance_arg())
        .arg(config_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Translate a filter tree for one content type.
pub fn filter_command() -> Command {
    Command::new("filter")
        .about("Translate a query filter into the persistence filter language")
        .after_help(
            r#"EXAMPLES:
  contentgraph filter types.json -u api::article.article -f '{"title":{"eq":"x"}}'
  contentgraph filter types.json -u api::article.article -f '{"rating":{"gt":3}}' --strict"#,
        )
        .arg(schema_path_arg())
        .arg(uid_arg())
        .arg(filter_arg())
        .arg(config_arg())
        .arg(strict_arg())
        .arg(compact_arg())
}
