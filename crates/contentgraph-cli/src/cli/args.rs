//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Content-type descriptor file (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Content-type descriptors as JSON (use \"-\" for stdin)")
}

/// Compiler configuration file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Compiler configuration as JSON")
}

/// Reject unresolved filter keys (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Reject unresolved filter keys instead of dropping them")
}

/// Restrict output to named definitions (--only).
pub fn only_arg() -> Arg {
    Arg::new("only")
        .long("only")
        .value_name("NAME")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Show only these definitions (repeatable, comma-separated)")
}

/// Annotate definitions with where they came from (--provenance).
pub fn provenance_arg() -> Arg {
    Arg::new("provenance")
        .long("provenance")
        .action(ArgAction::SetTrue)
        .help("Annotate each definition with its kind and origin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Content type to filter (-u/--uid).
pub fn uid_arg() -> Arg {
    Arg::new("uid")
        .short('u')
        .long("uid")
        .value_name("UID")
        .required(true)
        .help("Content type uid, e.g. api::article.article")
}

/// Filter tree as inline JSON (-f/--filter).
pub fn filter_arg() -> Arg {
    Arg::new("filter")
        .short('f')
        .long("filter")
        .value_name("JSON")
        .required(true)
        .help("Filter tree as JSON")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log progress (-v) or every step (-vv)")
}
