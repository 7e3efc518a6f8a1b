//! Scalar and enum mapping tables, and the internal types every schema has.

use contentgraph_core::ScalarKind;

use crate::filters::Operator;
use crate::naming::{enum_value_name, scalar_filter_input_name};
use crate::registry::{DefinitionKind, Provenance, RegistryError, TypeRegistry};
use crate::types::{
    EnumType, EnumValue, InputObjectType, ObjectType, Field, ScalarType, TypeDefinition, TypeRef,
};

pub const ID: &str = "ID";
pub const PAGINATION: &str = "Pagination";
pub const RESPONSE_COLLECTION_META: &str = "ResponseCollectionMeta";
pub const PUBLICATION_STATE: &str = "PublicationState";
pub const PAGINATION_ARG: &str = "PaginationArg";

/// Custom scalars the schema declares, with descriptions.
pub const CUSTOM_SCALARS: [(&str, &str); 5] = [
    ("JSON", "Arbitrary JSON value"),
    ("DateTime", "ISO-8601 date and time"),
    ("Date", "ISO-8601 calendar date"),
    ("Time", "ISO-8601 time of day"),
    ("Long", "64-bit signed integer"),
];

/// Scalars that get a `{Scalar}FilterInput`.
pub const FILTERABLE_SCALARS: [&str; 10] = [
    "ID", "String", "Int", "Long", "Float", "Boolean", "JSON", "Date", "Time", "DateTime",
];

/// Schema scalar for an attribute kind. `None` for kinds never exposed.
pub fn schema_scalar(kind: ScalarKind) -> Option<&'static str> {
    let name = match kind {
        ScalarKind::Password => return None,
        ScalarKind::String
        | ScalarKind::Text
        | ScalarKind::RichText
        | ScalarKind::Email
        | ScalarKind::Uid => "String",
        ScalarKind::Integer => "Int",
        ScalarKind::BigInteger => "Long",
        ScalarKind::Float | ScalarKind::Decimal => "Float",
        ScalarKind::Boolean => "Boolean",
        ScalarKind::Json => "JSON",
        ScalarKind::Date => "Date",
        ScalarKind::Time => "Time",
        ScalarKind::DateTime | ScalarKind::Timestamp => "DateTime",
    };
    Some(name)
}

/// Enum definition for an enumeration's stored values, in declaration order.
pub fn enum_definition(values: &[String]) -> EnumType {
    EnumType {
        values: values
            .iter()
            .map(|v| EnumValue {
                name: enum_value_name(v),
                value: v.clone(),
            })
            .collect(),
    }
}

fn scalar_filter_input(scalar: &str) -> InputObjectType {
    let input_name = scalar_filter_input_name(scalar);
    let mut input = InputObjectType::default();
    for op in Operator::ALL {
        input = input.field(op.name(), op.input_type(scalar, &input_name));
    }
    input
}

fn int() -> TypeRef {
    TypeRef::named("Int")
}

/// Register custom scalars, pagination types, publication state and scalar
/// filter inputs. Runs before any content type is compiled.
pub fn register_internal_types(registry: &mut TypeRegistry) -> Result<(), RegistryError> {
    for (name, description) in CUSTOM_SCALARS {
        registry.register(
            name,
            TypeDefinition::Scalar(ScalarType {
                description: Some(description.to_string()),
            }),
            Provenance::internal(DefinitionKind::Scalar),
        )?;
    }

    let mut pagination = ObjectType::default();
    for field in ["total", "page", "pageSize", "pageCount"] {
        pagination.add_field(field, Field::new(int().non_null()));
    }

    let mut meta = ObjectType::default();
    meta.add_field("pagination", Field::new(TypeRef::named(PAGINATION).non_null()));

    let publication_state = EnumType {
        values: ["LIVE", "PREVIEW"]
            .into_iter()
            .map(|v| EnumValue {
                name: v.to_string(),
                value: v.to_ascii_lowercase(),
            })
            .collect(),
    };

    let pagination_arg = InputObjectType::default()
        .field("page", int())
        .field("pageSize", int())
        .field("start", int())
        .field("limit", int());

    registry.register_many(
        [
            (PAGINATION.to_string(), TypeDefinition::Object(pagination)),
            (RESPONSE_COLLECTION_META.to_string(), TypeDefinition::Object(meta)),
            (PUBLICATION_STATE.to_string(), TypeDefinition::Enum(publication_state)),
            (PAGINATION_ARG.to_string(), TypeDefinition::InputObject(pagination_arg)),
        ],
        Provenance::internal(DefinitionKind::Internal),
    )?;

    registry.register_many(
        FILTERABLE_SCALARS.map(|scalar| {
            (
                scalar_filter_input_name(scalar),
                TypeDefinition::InputObject(scalar_filter_input(scalar)),
            )
        }),
        Provenance::internal(DefinitionKind::Filters),
    )
}
