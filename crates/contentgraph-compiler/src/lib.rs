//! contentgraph compiler: content-type descriptors to a content-API schema.
//!
//! This crate provides the schema build pipeline:
//! - `registry` - write-once store of named definitions with provenance
//! - `naming` - names of generated constructs
//! - `scalars` - scalar/enum tables and internal types
//! - `classify` - attribute classification
//! - `compile` - first pass (types, filters, entities, queries) and morph pass
//! - `filters` - query filter translation
//! - `execute` - resolver registry and response envelopes
//! - `dump` - human-readable schema rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod compile;
pub mod config;
pub mod dump;
pub mod execute;
pub mod filters;
pub mod naming;
pub mod registry;
pub mod scalars;
pub mod types;

#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
pub mod test_utils;

use contentgraph_core::{AssociationMetadata, ContentTypeSource, DescriptorError};

pub use compile::{CompileError, CompiledSchema, FirstPass, MorphPass, SchemaCompiler};
pub use config::{BatchRegistration, CompilerConfig, FilterMode};
pub use dump::Dumper;
pub use execute::{
    AcceptAllResolvers, ExecutionContext, ExecutionError, ResolverError, ResolverRegistry,
    ResolverTable,
};
pub use filters::{FilterError, FilterTranslator};
pub use registry::{DefinitionKind, Provenance, RegistryError, TypeRegistry};
pub use types::{TypeDefinition, TypeRef};

/// Errors across the build pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Compile every descriptor of `source` in one call.
pub fn compile_schema<S>(
    source: &S,
    resolvers: &dyn ResolverRegistry,
    config: CompilerConfig,
) -> Result<CompiledSchema>
where
    S: ContentTypeSource + AssociationMetadata,
{
    Ok(SchemaCompiler::new(source, resolvers).config(config).compile()?)
}
