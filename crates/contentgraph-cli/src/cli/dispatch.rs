//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::filter::FilterArgs;

pub struct DumpParams {
    pub schema_path: PathBuf,
    pub only: Vec<String>,
    pub provenance: bool,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            only: m
                .get_many::<String>("only")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            provenance: m.get_flag("provenance"),
            config: m.get_one::<PathBuf>("config").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            schema_path: p.schema_path,
            only: p.only,
            provenance: p.provenance,
            config_path: p.config,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FilterParams {
    pub schema_path: PathBuf,
    pub uid: String,
    pub filter: String,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub compact: bool,
}

impl FilterParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            uid: m.get_one::<String>("uid").cloned().unwrap_or_default(),
            filter: m.get_one::<String>("filter").cloned().unwrap_or_default(),
            config: m.get_one::<PathBuf>("config").cloned(),
            strict: m.get_flag("strict"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<FilterParams> for FilterArgs {
    fn from(p: FilterParams) -> Self {
        Self {
            schema_path: p.schema_path,
            uid: p.uid,
            filter: p.filter,
            config_path: p.config,
            strict: p.strict,
            compact: p.compact,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
