//! Write-once store of generated definitions.
//!
//! Every generated construct is registered exactly once under its name, with
//! provenance recording which content type (and attribute) produced it.
//! Iteration follows insertion order, so the emitted schema is deterministic
//! for a given visitation order.

use contentgraph_core::{AttributeKind, ContentTypeDescriptor, ModelKind};
use indexmap::IndexMap;

use crate::config::BatchRegistration;
use crate::types::TypeDefinition;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("type name `{name}` is already registered")]
    DuplicateTypeName { name: String },
}

/// Role of a definition in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Scalar,
    Internal,
    Enum,
    DynamicZone,
    DynamicZoneInput,
    Filters,
    ContentType,
    Component,
    Entity,
    EntityResponse,
    EntityResponseCollection,
    Morph,
    Query,
}

impl DefinitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Internal => "internal",
            Self::Enum => "enum",
            Self::DynamicZone => "dynamic-zone",
            Self::DynamicZoneInput => "dynamic-zone-input",
            Self::Filters => "filters",
            Self::ContentType => "content-type",
            Self::Component => "component",
            Self::Entity => "entity",
            Self::EntityResponse => "entity-response",
            Self::EntityResponseCollection => "entity-response-collection",
            Self::Morph => "morph",
            Self::Query => "query",
        }
    }
}

/// Non-polymorphic relation declared by a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTarget {
    pub attribute: String,
    pub target: String,
    pub plugin: Option<String>,
}

/// The content type a definition was generated from.
///
/// Carries the owner's outgoing relations so the morph pass can find
/// back-links by inspecting the registry alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub uid: String,
    pub plugin: Option<String>,
    pub model_kind: ModelKind,
    pub relations: Vec<RelationTarget>,
}

impl Origin {
    pub fn from_descriptor(descriptor: &ContentTypeDescriptor) -> Self {
        let relations = descriptor
            .attributes
            .iter()
            .filter_map(|(name, attr)| match &attr.kind {
                AttributeKind::Relation(rel) if !rel.polymorphic => {
                    let target = rel.target.clone()?;
                    Some(RelationTarget {
                        attribute: name.clone(),
                        target,
                        plugin: rel.plugin.clone(),
                    })
                }
                _ => None,
            })
            .collect();

        Self {
            uid: descriptor.uid.clone(),
            plugin: descriptor.plugin.clone(),
            model_kind: descriptor.kind,
            relations,
        }
    }

    /// Whether a non-polymorphic relation points at `uid`. A relation that
    /// names a plugin only matches an owner from that plugin.
    pub fn relates_to(&self, uid: &str, plugin: Option<&str>) -> bool {
        self.relations.iter().any(|r| {
            r.target == uid && (r.plugin.is_none() || r.plugin.as_deref() == plugin)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub kind: DefinitionKind,
    pub origin: Option<Origin>,
    pub attribute: Option<String>,
}

impl Provenance {
    /// Provenance for definitions not tied to a content type.
    pub fn internal(kind: DefinitionKind) -> Self {
        Self {
            kind,
            origin: None,
            attribute: None,
        }
    }

    pub fn content_type(kind: DefinitionKind, descriptor: &ContentTypeDescriptor) -> Self {
        Self {
            kind,
            origin: Some(Origin::from_descriptor(descriptor)),
            attribute: None,
        }
    }

    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    pub fn origin_uid(&self) -> Option<&str> {
        self.origin.as_ref().map(|o| o.uid.as_str())
    }

    /// Generated for the given content type and attribute.
    pub fn is_for(&self, uid: &str, attribute: &str) -> bool {
        self.origin_uid() == Some(uid) && self.attribute.as_deref() == Some(attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub definition: TypeDefinition,
    pub provenance: Provenance,
}

/// Name → definition store. Names are unique for the registry's lifetime
/// unless explicitly deleted.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, Entry>,
    batch_mode: BatchRegistration,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_mode(batch_mode: BatchRegistration) -> Self {
        Self {
            entries: IndexMap::new(),
            batch_mode,
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: TypeDefinition,
        provenance: Provenance,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateTypeName { name });
        }
        self.entries.insert(
            name,
            Entry {
                definition,
                provenance,
            },
        );
        Ok(())
    }

    /// Register a batch under one shared provenance.
    ///
    /// In `Sequential` mode the first duplicate aborts the batch and earlier
    /// entries of the batch stay registered. In `Atomic` mode the batch is
    /// checked (against the registry and itself) before anything is inserted.
    pub fn register_many<I>(&mut self, pairs: I, provenance: Provenance) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (String, TypeDefinition)>,
    {
        match self.batch_mode {
            BatchRegistration::Sequential => {
                for (name, definition) in pairs {
                    self.register(name, definition, provenance.clone())?;
                }
            }
            BatchRegistration::Atomic => {
                let pairs: Vec<_> = pairs.into_iter().collect();
                for (i, (name, _)) in pairs.iter().enumerate() {
                    let repeated = pairs[..i].iter().any(|(prev, _)| prev == name);
                    if repeated || self.has(name) {
                        return Err(RegistryError::DuplicateTypeName { name: name.clone() });
                    }
                }
                for (name, definition) in pairs {
                    self.register(name, definition, provenance.clone())?;
                }
            }
        }
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.get(name).map(|e| &e.definition)
    }

    /// Remove a definition, keeping the order of the rest.
    pub fn delete(&mut self, name: &str) -> Option<Entry> {
        self.entries.shift_remove(name)
    }

    /// All definitions whose provenance matches `predicate`, in order.
    pub fn select<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = (&'a str, &'a TypeDefinition, &'a Provenance)> + 'a
    where
        P: Fn(&Provenance) -> bool + 'a,
    {
        self.entries
            .iter()
            .filter(move |(_, e)| predicate(&e.provenance))
            .map(|(name, e)| (name.as_str(), &e.definition, &e.provenance))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, e)| (name.as_str(), e))
    }

    /// Ordered snapshot of `(name, definition)` pairs.
    pub fn definitions(&self) -> Vec<(&str, &TypeDefinition)> {
        self.entries
            .iter()
            .map(|(name, e)| (name.as_str(), &e.definition))
            .collect()
    }

    /// Ordered snapshot of registered names.
    pub fn types(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
