//! Schema model: definitions, fields, and type references.
//!
//! Definitions never store their own name. The registry key is the name, and
//! every cross-reference is a name, so definitions can be moved or rebuilt
//! without dangling links.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

/// Reference to a named type, possibly wrapped in list / non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap in non-null. Already non-null references are returned unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wrap in non-null when `required` holds.
    pub fn required_if(self, required: bool) -> Self {
        if required { self.non_null() } else { self }
    }

    /// Innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.base_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Argument or input-object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub ty: TypeRef,
}

impl InputValue {
    pub fn new(ty: TypeRef) -> Self {
        Self { ty }
    }
}

/// Which query a bound field answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// One entry of a collection type, by id or unique attribute.
    FindOne,
    /// Filtered, paginated list of a collection type.
    FindMany,
    /// The entry of a single type.
    FindSingle,
}

/// A query field bound to a resolver action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBinding {
    /// `{uid}.{action}`
    pub action: String,
    pub kind: QueryKind,
    pub content_type: String,
}

/// How a field obtains its value at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldResolver {
    /// Read the property of the same name from the parent object.
    #[default]
    Property,
    /// Relation resolution, delegated to the host's association resolver.
    Association {
        content_type: String,
        attribute: String,
    },
    Component {
        attribute: String,
    },
    DynamicZone {
        attribute: String,
    },
    Morph {
        content_type: String,
        attribute: String,
    },
    Query(QueryBinding),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ty: TypeRef,
    pub args: IndexMap<String, InputValue>,
    pub resolver: FieldResolver,
}

impl Field {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            args: IndexMap::new(),
            resolver: FieldResolver::Property,
        }
    }

    pub fn resolver(mut self, resolver: FieldResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn arg(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.args.insert(name.into(), InputValue::new(ty));
        self
    }
}

// ============================================================================
// Definitions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScalarType {
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectType {
    pub fields: IndexMap<String, Field>,
}

impl ObjectType {
    /// Insert a field. Returns `false` if the name was already taken, in
    /// which case the existing field is kept.
    pub fn add_field(&mut self, name: impl Into<String>, field: Field) -> bool {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return false;
        }
        self.fields.insert(name, field);
        true
    }
}

/// Fields contributed to a root object (e.g. `Query`) by one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExtension {
    pub extends: String,
    pub fields: IndexMap<String, Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputObjectType {
    pub fields: IndexMap<String, InputValue>,
}

impl InputObjectType {
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.insert(name.into(), InputValue::new(ty));
        self
    }
}

/// Enum member. `name` is the schema-safe identifier, `value` the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumType {
    pub values: Vec<EnumValue>,
}

impl EnumType {
    /// Stored value for a schema-level member name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionMember {
    pub type_name: String,
    /// Discriminator value identifying this member in data objects.
    pub uid: String,
}

/// Union resolved at runtime by reading `discriminator` from the data object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub members: Vec<UnionMember>,
    pub discriminator: String,
}

impl UnionType {
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            members: Vec::new(),
            discriminator: discriminator.into(),
        }
    }

    pub fn member(mut self, type_name: impl Into<String>, uid: impl Into<String>) -> Self {
        self.members.push(UnionMember {
            type_name: type_name.into(),
            uid: uid.into(),
        });
        self
    }

    /// Member type name for a data object, if its discriminator names a member.
    pub fn resolve_type(&self, value: &Value) -> Option<&str> {
        let tag = value.get(&self.discriminator)?.as_str()?;
        self.members
            .iter()
            .find(|m| m.uid == tag)
            .map(|m| m.type_name.as_str())
    }
}

/// A generated schema construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Extension(TypeExtension),
    InputObject(InputObjectType),
    Enum(EnumType),
    Union(UnionType),
}

impl TypeDefinition {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "type",
            Self::Extension(_) => "extend type",
            Self::InputObject(_) => "input",
            Self::Enum(_) => "enum",
            Self::Union(_) => "union",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> Option<&TypeExtension> {
        match self {
            Self::Extension(x) => Some(x),
            _ => None,
        }
    }
}
