//! Compiler state and phase entry points.
//!
//! A build runs in two phases with a typed hand-off:
//! `SchemaCompiler::first_pass() -> FirstPass`, then
//! `MorphPass::from(first).run() -> CompiledSchema`.

use std::collections::HashSet;

use contentgraph_core::{AssociationMetadata, ContentTypeDescriptor, ContentTypeSource};
use indexmap::IndexMap;

use crate::config::CompilerConfig;
use crate::execute::ResolverRegistry;
use crate::registry::{Origin, TypeRegistry};
use crate::scalars::register_internal_types;
use crate::types::{Field, TypeDefinition};

use super::error::CompileResult;
use super::morph::MorphPass;

/// Polymorphic relation whose union is built in the morph pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphRequest {
    pub owner: Origin,
    pub attribute: String,
    pub union_name: String,
}

/// First-pass compiler state.
pub struct SchemaCompiler<'a> {
    pub(super) source: &'a dyn ContentTypeSource,
    pub(super) associations: &'a dyn AssociationMetadata,
    pub(super) resolvers: &'a dyn ResolverRegistry,
    pub(super) config: CompilerConfig,
    pub(super) registry: TypeRegistry,
    /// Uids compiled or being compiled. Guards component cycles.
    pub(super) visited: HashSet<String>,
    pub(super) pending: Vec<MorphRequest>,
    /// Query field name → owning uid.
    pub(super) query_fields: IndexMap<String, String>,
}

impl<'a> SchemaCompiler<'a> {
    /// Create a compiler over `source`, which also answers association lookups.
    pub fn new<S>(source: &'a S, resolvers: &'a dyn ResolverRegistry) -> Self
    where
        S: ContentTypeSource + AssociationMetadata,
    {
        Self {
            source,
            associations: source,
            resolvers,
            config: CompilerConfig::default(),
            registry: TypeRegistry::new(),
            visited: HashSet::new(),
            pending: Vec::new(),
            query_fields: IndexMap::new(),
        }
    }

    pub fn config(mut self, config: CompilerConfig) -> Self {
        self.registry = TypeRegistry::with_batch_mode(config.batch_registration);
        self.config = config;
        self
    }

    /// Use a separate association accessor.
    pub fn associations(mut self, associations: &'a dyn AssociationMetadata) -> Self {
        self.associations = associations;
        self
    }

    /// Register internal types, then every content type and component.
    pub fn first_pass(mut self) -> CompileResult<FirstPass> {
        register_internal_types(&mut self.registry)?;

        let source = self.source;
        for descriptor in source.descriptors() {
            self.compile_descriptor(descriptor)?;
        }

        tracing::debug!(
            definitions = self.registry.len(),
            pending_morphs = self.pending.len(),
            "first pass complete"
        );

        Ok(FirstPass {
            registry: self.registry,
            pending: self.pending,
            config: self.config,
        })
    }

    /// Run both phases.
    pub fn compile(self) -> CompileResult<CompiledSchema> {
        let first = self.first_pass()?;
        MorphPass::from(first).run()
    }

    pub(super) fn compile_descriptor(
        &mut self,
        ct: &'a ContentTypeDescriptor,
    ) -> CompileResult<()> {
        if !self.visited.insert(ct.uid.clone()) {
            return Ok(());
        }
        tracing::debug!(uid = %ct.uid, kind = ct.kind.as_str(), "compiling");

        let base = self.build_object_type(ct)?;
        if !ct.is_component() {
            self.register_filters(ct)?;
        }
        self.register_base_type(ct, base)?;
        self.register_entities(ct)?;
        self.register_queries(ct)?;
        Ok(())
    }
}

/// Registry after every content type has been visited.
///
/// Only a `FirstPass` can start the morph pass, so unions are never built
/// against a partial registry.
#[derive(Debug)]
pub struct FirstPass {
    pub(super) registry: TypeRegistry,
    pub(super) pending: Vec<MorphRequest>,
    pub(super) config: CompilerConfig,
}

impl FirstPass {
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn pending(&self) -> &[MorphRequest] {
        &self.pending
    }
}

/// A finished schema model.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub(crate) registry: TypeRegistry,
    pub(crate) config: CompilerConfig,
}

impl CompiledSchema {
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.registry.definition(name)
    }

    pub fn definitions(&self) -> Vec<(&str, &TypeDefinition)> {
        self.registry.definitions()
    }

    pub fn types(&self) -> Vec<&str> {
        self.registry.types()
    }

    /// Fields contributed to `Query`, across all content types.
    pub fn query_fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.registry
            .iter()
            .filter_map(|(_, entry)| entry.definition.as_extension())
            .filter(|ext| ext.extends == "Query")
            .flat_map(|ext| ext.fields.iter().map(|(name, f)| (name.as_str(), f)))
    }

    pub fn query_field(&self, name: &str) -> Option<&Field> {
        self.query_fields()
            .find(|(field, _)| *field == name)
            .map(|(_, f)| f)
    }
}
