//! Filter operator vocabulary.
//!
//! Each operator has a public name (as written in query filters) and an
//! internal name (as understood by the persistence layer).

use crate::types::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Eq,
    Eqi,
    Ne,
    StartsWith,
    EndsWith,
    Contains,
    NotContains,
    Containsi,
    NotContainsi,
    Gt,
    Gte,
    Lt,
    Lte,
    Null,
    NotNull,
    In,
    NotIn,
    Between,
}

impl Operator {
    pub const ALL: [Operator; 21] = [
        Self::And,
        Self::Or,
        Self::Not,
        Self::Eq,
        Self::Eqi,
        Self::Ne,
        Self::StartsWith,
        Self::EndsWith,
        Self::Contains,
        Self::NotContains,
        Self::Containsi,
        Self::NotContainsi,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Null,
        Self::NotNull,
        Self::In,
        Self::NotIn,
        Self::Between,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Eq => "eq",
            Self::Eqi => "eqi",
            Self::Ne => "ne",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::Containsi => "containsi",
            Self::NotContainsi => "notContainsi",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Null => "null",
            Self::NotNull => "notNull",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Between => "between",
        }
    }

    pub fn internal_name(self) -> &'static str {
        match self {
            Self::And => "$and",
            Self::Or => "$or",
            Self::Not => "$not",
            Self::Eq => "$eq",
            Self::Eqi => "$eqi",
            Self::Ne => "$ne",
            Self::StartsWith => "$startsWith",
            Self::EndsWith => "$endsWith",
            Self::Contains => "$contains",
            Self::NotContains => "$notContains",
            Self::Containsi => "$containsi",
            Self::NotContainsi => "$notContainsi",
            Self::Gt => "$gt",
            Self::Gte => "$gte",
            Self::Lt => "$lt",
            Self::Lte => "$lte",
            Self::Null => "$null",
            Self::NotNull => "$notNull",
            Self::In => "$in",
            Self::NotIn => "$notIn",
            Self::Between => "$between",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }

    /// Input type of this operator inside `{scalar}FilterInput`.
    pub fn input_type(self, scalar: &str, filter_input: &str) -> TypeRef {
        match self {
            Self::And | Self::Or => TypeRef::named(filter_input).list(),
            Self::Not => TypeRef::named(filter_input),
            Self::Null | Self::NotNull => TypeRef::named("Boolean"),
            Self::In | Self::NotIn | Self::Between => TypeRef::named(scalar).list(),
            _ => TypeRef::named(scalar),
        }
    }
}
