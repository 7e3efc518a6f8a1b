//! Names of generated schema constructs.
//!
//! Every function here is a pure function of the descriptor (and attribute
//! name), so two builds over the same content types produce the same names
//! regardless of visitation order.

use contentgraph_core::{ContentTypeDescriptor, ModelKind};
use contentgraph_core::utils::{
    pluralize, singularize, to_camel_case, to_pascal_case, to_upper_snake_case,
};

/// Singular display name: declared `singularName`, else the singularized
/// model name.
pub fn singular_name(ct: &ContentTypeDescriptor) -> String {
    match &ct.singular_name {
        Some(name) => name.clone(),
        None => singularize(&ct.model_name),
    }
}

/// Plural display name: declared `pluralName`, else the pluralized singular.
pub fn plural_name(ct: &ContentTypeDescriptor) -> String {
    match &ct.plural_name {
        Some(name) => name.clone(),
        None => pluralize(&singular_name(ct)),
    }
}

/// `Article` for `api::article.article`.
pub fn type_name(ct: &ContentTypeDescriptor) -> String {
    to_pascal_case(&singular_name(ct))
}

pub fn entity_name(ct: &ContentTypeDescriptor) -> String {
    format!("{}Entity", type_name(ct))
}

pub fn entity_response_name(ct: &ContentTypeDescriptor) -> String {
    format!("{}Response", entity_name(ct))
}

pub fn entity_response_collection_name(ct: &ContentTypeDescriptor) -> String {
    format!("{}ResponseCollection", entity_name(ct))
}

pub fn filters_input_name(ct: &ContentTypeDescriptor) -> String {
    format!("{}FiltersInput", type_name(ct))
}

/// Explicit `enumName` wins; otherwise `ENUM_{MODEL}_{ATTRIBUTE}`.
pub fn enum_name(ct: &ContentTypeDescriptor, attribute: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => format!(
            "ENUM_{}_{}",
            to_upper_snake_case(&ct.model_name),
            to_upper_snake_case(attribute)
        ),
    }
}

pub fn dynamic_zone_name(ct: &ContentTypeDescriptor, attribute: &str) -> String {
    format!("{}{}DynamicZone", type_name(ct), to_pascal_case(attribute))
}

pub fn dynamic_zone_input_name(ct: &ContentTypeDescriptor, attribute: &str) -> String {
    format!("{}Input", dynamic_zone_name(ct, attribute))
}

pub fn morph_name(ct: &ContentTypeDescriptor, attribute: &str) -> String {
    format!("{}{}Morph", type_name(ct), to_pascal_case(attribute))
}

/// Name of the `Query` extension holding a content type's query fields.
pub fn queries_name(ct: &ContentTypeDescriptor) -> String {
    format!("{}Queries", type_name(ct))
}

pub fn find_one_query_name(ct: &ContentTypeDescriptor) -> String {
    to_camel_case(&singular_name(ct))
}

/// `find` for collection types uses the plural, for single types the singular.
pub fn find_query_name(ct: &ContentTypeDescriptor) -> String {
    if ct.kind == ModelKind::SingleType {
        return to_camel_case(&singular_name(ct));
    }
    to_camel_case(&plural_name(ct))
}

/// `StringFilterInput` for `String`.
pub fn scalar_filter_input_name(scalar: &str) -> String {
    format!("{scalar}FilterInput")
}

/// Schema-safe enum member name for a stored value.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; a leading digit gets a `_`
/// prefix.
pub fn enum_value_name(value: &str) -> String {
    let mut out: String = value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
