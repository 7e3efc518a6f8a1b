use std::path::PathBuf;

use contentgraph_compiler::{AcceptAllResolvers, compile_schema};

use super::fail;
use super::loader::{load_config, load_content_types};

pub struct DumpArgs {
    pub schema_path: PathBuf,
    pub only: Vec<String>,
    pub provenance: bool,
    pub config_path: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

/// Compiles as if every resolver action exists, so all query fields show.
pub fn run(args: DumpArgs) {
    let types = load_content_types(&args.schema_path).unwrap_or_else(|e| fail(e));
    let config =
        load_config(args.config_path.as_deref(), args.strict).unwrap_or_else(|e| fail(e));

    let schema = match compile_schema(&types, &AcceptAllResolvers, config) {
        Ok(schema) => schema,
        Err(e) => fail(e),
    };

    let mut dumper = schema
        .dumper()
        .colored(args.color)
        .provenance(args.provenance);
    if !args.only.is_empty() {
        dumper = dumper.only(args.only);
    }
    print!("{}", dumper.dump());
}
