//! Compilation errors.

use crate::registry::RegistryError;

/// Fatal errors that abort a schema build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{content_type}.{attribute}: unknown component `{component}`")]
    UnknownComponentReference {
        content_type: String,
        attribute: String,
        component: String,
    },

    #[error("field `{field}` is defined twice on `{type_name}`")]
    DuplicateField { type_name: String, field: String },

    #[error("enum `{enum_name}` has more than one member named `{value}`")]
    DuplicateEnumValue { enum_name: String, value: String },
}

pub type CompileResult<T> = Result<T, CompileError>;
