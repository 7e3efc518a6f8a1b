use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use contentgraph_compiler::CompilerConfig;
use contentgraph_core::{ContentTypes, DescriptorError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid descriptors in '{}': {source}", path.display())]
    Descriptors {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

/// Descriptors from a JSON file, or stdin for `-`.
pub fn load_content_types(path: &Path) -> Result<ContentTypes, LoadError> {
    let json = read(path)?;
    let types = ContentTypes::from_json(&json).map_err(|source| LoadError::Descriptors {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        content_types = types.content_types().count(),
        components = types.components().count(),
        "loaded descriptors"
    );
    Ok(types)
}

/// Config from `path` (defaults when absent). `--strict` overrides the file.
pub fn load_config(path: Option<&Path>, strict: bool) -> Result<CompilerConfig, LoadError> {
    let config = match path {
        Some(path) => {
            let json = read(path)?;
            CompilerConfig::from_json(&json).map_err(|source| LoadError::Config {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => CompilerConfig::default(),
    };
    Ok(if strict { config.strict(true) } else { config })
}
