#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Content-type model for the contentgraph schema compiler.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the host's content-type JSON
//! - **Descriptor layer**: validated descriptors with a closed attribute enum
//!
//! The compiler only sees the descriptor layer, through the host traits
//! `ContentTypeSource` and `AssociationMetadata`.

use indexmap::IndexMap;

mod palette;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use palette::Palette;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw content-type definition as exported by the host platform.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentType {
    pub uid: String,
    pub model_name: String,
    pub kind: ModelKind,
    pub plugin: Option<String>,
    #[serde(default)]
    pub info: RawInfo,
    #[serde(default)]
    pub options: RawOptions,
    #[serde(default)]
    pub attributes: IndexMap<String, RawAttribute>,
    #[serde(default)]
    pub associations: IndexMap<String, RelationNature>,
    #[serde(default)]
    pub timestamps: Vec<String>,
}

/// Display names declared on a content type.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInfo {
    pub singular_name: Option<String>,
    pub plural_name: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default)]
    pub draft_and_publish: bool,
}

/// Raw attribute definition. Which keys are meaningful depends on `type`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttribute {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub enum_name: Option<String>,
    pub relation: Option<RelationNature>,
    pub target: Option<String>,
    pub plugin: Option<String>,
    pub component: Option<String>,
    #[serde(default)]
    pub repeatable: bool,
    pub components: Option<Vec<String>>,
}

/// Parse content-type JSON (an array of definitions) into raw definitions.
pub fn parse_raw_content_types(json: &str) -> Result<Vec<RawContentType>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse and validate content-type JSON into descriptors.
pub fn parse_content_types(json: &str) -> Result<Vec<ContentTypeDescriptor>, DescriptorError> {
    parse_raw_content_types(json)?
        .into_iter()
        .map(ContentTypeDescriptor::try_from)
        .collect()
}

// ============================================================================
// Common Types
// ============================================================================

/// What kind of model a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    CollectionType,
    SingleType,
    Component,
}

impl ModelKind {
    pub fn is_component(self) -> bool {
        matches!(self, Self::Component)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollectionType => "collectionType",
            Self::SingleType => "singleType",
            Self::Component => "component",
        }
    }
}

/// Declared relation nature (cardinality plus direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationNature {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    OneWay,
    ManyWay,
    MorphOne,
    MorphMany,
    MorphToOne,
    MorphToMany,
}

impl RelationNature {
    /// Whether the owning side holds a list of related entries.
    pub fn is_to_many(self) -> bool {
        matches!(
            self,
            Self::OneToMany | Self::ManyToMany | Self::ManyWay | Self::MorphMany | Self::MorphToMany
        )
    }

    /// Whether the target kind is decided per entry at runtime.
    pub fn is_polymorphic(self) -> bool {
        matches!(self, Self::MorphToOne | Self::MorphToMany)
    }
}

/// Primitive attribute kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Text,
    RichText,
    Email,
    Password,
    Uid,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Json,
    Date,
    Time,
    DateTime,
    Timestamp,
}

impl ScalarKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "string" => Self::String,
            "text" => Self::Text,
            "richtext" => Self::RichText,
            "email" => Self::Email,
            "password" => Self::Password,
            "uid" => Self::Uid,
            "integer" => Self::Integer,
            "biginteger" => Self::BigInteger,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "boolean" => Self::Boolean,
            "json" => Self::Json,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            "timestamp" => Self::Timestamp,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::RichText => "richtext",
            Self::Email => "email",
            Self::Password => "password",
            Self::Uid => "uid",
            Self::Integer => "integer",
            Self::BigInteger => "biginteger",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Json => "json",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
        }
    }
}

/// Errors raised while validating raw definitions.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid content-type JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{uid}.{attribute}: unknown attribute type `{type_name}`")]
    UnknownAttributeType {
        uid: String,
        attribute: String,
        type_name: String,
    },

    #[error("{uid}.{attribute}: relation has no target")]
    MissingRelationTarget { uid: String, attribute: String },

    #[error("{uid}.{attribute}: component attribute names no component")]
    MissingComponent { uid: String, attribute: String },

    #[error("{uid}.{attribute}: enumeration declares no values")]
    EmptyEnumeration { uid: String, attribute: String },

    #[error("content type `{0}` is defined twice")]
    DuplicateUid(String),
}

// ============================================================================
// Descriptor Layer
// ============================================================================

/// A relation attribute.
///
/// `target` is `None` only for polymorphic relations, whose target kind is
/// carried by each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub target: Option<String>,
    pub plugin: Option<String>,
    pub nature: Option<RelationNature>,
    pub polymorphic: bool,
}

/// Closed set of attribute kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    Scalar { scalar: ScalarKind, unique: bool },
    Enumeration {
        values: Vec<String>,
        enum_name: Option<String>,
    },
    Relation(Relation),
    Component { component: String, repeatable: bool },
    DynamicZone { components: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub kind: AttributeKind,
    pub required: bool,
    pub private: bool,
}

impl AttributeDescriptor {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: false,
            private: false,
        }
    }

    pub fn scalar(scalar: ScalarKind) -> Self {
        Self::new(AttributeKind::Scalar {
            scalar,
            unique: false,
        })
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AttributeKind::Enumeration {
            values: values.into_iter().map(Into::into).collect(),
            enum_name: None,
        })
    }

    pub fn relation(nature: RelationNature, target: impl Into<String>) -> Self {
        Self::new(AttributeKind::Relation(Relation {
            target: Some(target.into()),
            plugin: None,
            nature: Some(nature),
            polymorphic: nature.is_polymorphic(),
        }))
    }

    /// Polymorphic relation (`morphToOne` / `morphToMany`).
    pub fn morph(nature: RelationNature) -> Self {
        Self::new(AttributeKind::Relation(Relation {
            target: None,
            plugin: None,
            nature: Some(nature),
            polymorphic: true,
        }))
    }

    pub fn component(component: impl Into<String>, repeatable: bool) -> Self {
        Self::new(AttributeKind::Component {
            component: component.into(),
            repeatable,
        })
    }

    pub fn dynamic_zone<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AttributeKind::DynamicZone {
            components: components.into_iter().map(Into::into).collect(),
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Mark a scalar as unique. No effect on other kinds.
    pub fn unique(mut self) -> Self {
        if let AttributeKind::Scalar { unique, .. } = &mut self.kind {
            *unique = true;
        }
        self
    }

    /// Set an explicit enum type name. No effect on other kinds.
    pub fn enum_name(mut self, name: impl Into<String>) -> Self {
        if let AttributeKind::Enumeration { enum_name, .. } = &mut self.kind {
            *enum_name = Some(name.into());
        }
        self
    }

    fn from_raw(uid: &str, attribute: &str, raw: RawAttribute) -> Result<Self, DescriptorError> {
        let kind = match raw.type_name.as_str() {
            "enumeration" => {
                let values = raw.enum_values.unwrap_or_default();
                if values.is_empty() {
                    return Err(DescriptorError::EmptyEnumeration {
                        uid: uid.to_string(),
                        attribute: attribute.to_string(),
                    });
                }
                AttributeKind::Enumeration {
                    values,
                    enum_name: raw.enum_name,
                }
            }
            "relation" => {
                let polymorphic = raw.relation.is_some_and(RelationNature::is_polymorphic);
                if raw.target.is_none() && !polymorphic {
                    return Err(DescriptorError::MissingRelationTarget {
                        uid: uid.to_string(),
                        attribute: attribute.to_string(),
                    });
                }
                AttributeKind::Relation(Relation {
                    target: raw.target,
                    plugin: raw.plugin,
                    nature: raw.relation,
                    polymorphic,
                })
            }
            "component" => {
                let Some(component) = raw.component else {
                    return Err(DescriptorError::MissingComponent {
                        uid: uid.to_string(),
                        attribute: attribute.to_string(),
                    });
                };
                AttributeKind::Component {
                    component,
                    repeatable: raw.repeatable,
                }
            }
            "dynamiczone" => AttributeKind::DynamicZone {
                components: raw.components.unwrap_or_default(),
            },
            other => {
                let Some(scalar) = ScalarKind::from_type_name(other) else {
                    return Err(DescriptorError::UnknownAttributeType {
                        uid: uid.to_string(),
                        attribute: attribute.to_string(),
                        type_name: other.to_string(),
                    });
                };
                AttributeKind::Scalar {
                    scalar,
                    unique: raw.unique,
                }
            }
        };

        Ok(Self {
            kind,
            required: raw.required,
            private: raw.private,
        })
    }
}

/// Validated content-type (or component) description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeDescriptor {
    pub uid: String,
    pub model_name: String,
    pub kind: ModelKind,
    pub plugin: Option<String>,
    pub singular_name: Option<String>,
    pub plural_name: Option<String>,
    /// Attributes in declaration order.
    pub attributes: IndexMap<String, AttributeDescriptor>,
    /// Relation natures by alias, for relations declared without one.
    pub associations: IndexMap<String, RelationNature>,
    pub timestamps: Vec<String>,
    pub draft_and_publish: bool,
}

impl ContentTypeDescriptor {
    pub fn new(uid: impl Into<String>, model_name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            uid: uid.into(),
            model_name: model_name.into(),
            kind,
            plugin: None,
            singular_name: None,
            plural_name: None,
            attributes: IndexMap::new(),
            associations: IndexMap::new(),
            timestamps: Vec::new(),
            draft_and_publish: false,
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, attribute: AttributeDescriptor) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    pub fn names(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.singular_name = Some(singular.into());
        self.plural_name = Some(plural.into());
        self
    }

    pub fn timestamps<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timestamps = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn draft_and_publish(mut self, enabled: bool) -> Self {
        self.draft_and_publish = enabled;
        self
    }

    pub fn is_component(&self) -> bool {
        self.kind.is_component()
    }
}

impl TryFrom<RawContentType> for ContentTypeDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawContentType) -> Result<Self, Self::Error> {
        let mut attributes = IndexMap::with_capacity(raw.attributes.len());
        for (name, raw_attr) in raw.attributes {
            let attr = AttributeDescriptor::from_raw(&raw.uid, &name, raw_attr)?;
            attributes.insert(name, attr);
        }

        Ok(Self {
            uid: raw.uid,
            model_name: raw.model_name,
            kind: raw.kind,
            plugin: raw.plugin,
            singular_name: raw.info.singular_name,
            plural_name: raw.info.plural_name,
            attributes,
            associations: raw.associations,
            timestamps: raw.timestamps,
            draft_and_publish: raw.options.draft_and_publish,
        })
    }
}

// ============================================================================
// Host Traits
// ============================================================================

/// Enumerable source of descriptors, keyed by uid.
pub trait ContentTypeSource {
    fn content_type(&self, uid: &str) -> Option<&ContentTypeDescriptor>;
    fn descriptors(&self) -> Box<dyn Iterator<Item = &ContentTypeDescriptor> + '_>;
}

impl<T: ContentTypeSource + ?Sized> ContentTypeSource for &T {
    fn content_type(&self, uid: &str) -> Option<&ContentTypeDescriptor> {
        (*self).content_type(uid)
    }
    fn descriptors(&self) -> Box<dyn Iterator<Item = &ContentTypeDescriptor> + '_> {
        (*self).descriptors()
    }
}

/// Relation metadata lookup for descriptors that omit a relation nature.
pub trait AssociationMetadata {
    fn relation_nature(&self, uid: &str, attribute: &str) -> Option<RelationNature>;
}

impl<T: AssociationMetadata + ?Sized> AssociationMetadata for &T {
    fn relation_nature(&self, uid: &str, attribute: &str) -> Option<RelationNature> {
        (*self).relation_nature(uid, attribute)
    }
}

// ============================================================================
// In-memory Collection
// ============================================================================

/// Descriptors indexed by uid, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    entries: IndexMap<String, ContentTypeDescriptor>,
}

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from descriptors, rejecting duplicate uids.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = ContentTypeDescriptor>,
    {
        let mut this = Self::new();
        for descriptor in descriptors {
            this.insert(descriptor)?;
        }
        Ok(this)
    }

    /// Parse and validate content-type JSON.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Self::from_descriptors(parse_content_types(json)?)
    }

    pub fn insert(&mut self, descriptor: ContentTypeDescriptor) -> Result<(), DescriptorError> {
        if self.entries.contains_key(&descriptor.uid) {
            return Err(DescriptorError::DuplicateUid(descriptor.uid));
        }
        self.entries.insert(descriptor.uid.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, uid: &str) -> Option<&ContentTypeDescriptor> {
        self.entries.get(uid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.entries.values()
    }

    /// Collection and single types.
    pub fn content_types(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.iter().filter(|d| !d.is_component())
    }

    pub fn components(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.iter().filter(|d| d.is_component())
    }
}

impl ContentTypeSource for ContentTypes {
    fn content_type(&self, uid: &str) -> Option<&ContentTypeDescriptor> {
        self.get(uid)
    }

    fn descriptors(&self) -> Box<dyn Iterator<Item = &ContentTypeDescriptor> + '_> {
        Box::new(self.entries.values())
    }
}

impl AssociationMetadata for ContentTypes {
    fn relation_nature(&self, uid: &str, attribute: &str) -> Option<RelationNature> {
        self.get(uid)?.associations.get(attribute).copied()
    }
}
