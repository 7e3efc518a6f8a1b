use std::path::PathBuf;

use contentgraph_compiler::FilterTranslator;
use serde_json::Value;

use super::fail;
use super::loader::{load_config, load_content_types};

pub struct FilterArgs {
    pub schema_path: PathBuf,
    pub uid: String,
    pub filter: String,
    pub config_path: Option<PathBuf>,
    pub strict: bool,
    pub compact: bool,
}

pub fn run(args: FilterArgs) {
    let types = load_content_types(&args.schema_path).unwrap_or_else(|e| fail(e));
    let config =
        load_config(args.config_path.as_deref(), args.strict).unwrap_or_else(|e| fail(e));

    let filter: Value = match serde_json::from_str(&args.filter) {
        Ok(filter) => filter,
        Err(e) => fail(format!("filter is not valid JSON: {e}")),
    };

    let translator = FilterTranslator::new(&types, config.get_filter_mode());
    let translated = match translator.translate_for(&filter, &args.uid) {
        Ok(value) => value,
        Err(e) => fail(e),
    };

    let output = if args.compact {
        serde_json::to_string(&translated)
    } else {
        serde_json::to_string_pretty(&translated)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => fail(e),
    }
}
