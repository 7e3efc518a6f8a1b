//! Attribute classification.
//!
//! The type compiler dispatches on [`Classified`], a closed match that
//! separates polymorphic relations from ordinary ones and resolves the
//! relation cardinality.

use contentgraph_core::{
    AssociationMetadata, AttributeDescriptor, AttributeKind, Relation, RelationNature, ScalarKind,
};

/// An attribute after classification.
#[derive(Debug, Clone, Copy)]
pub enum Classified<'a> {
    Scalar {
        scalar: ScalarKind,
        unique: bool,
    },
    Enumeration {
        values: &'a [String],
        enum_name: Option<&'a str>,
    },
    Relation {
        target: &'a str,
        relation: &'a Relation,
        to_many: bool,
    },
    Morph {
        to_many: bool,
    },
    Component {
        component: &'a str,
        repeatable: bool,
    },
    DynamicZone {
        components: &'a [String],
    },
}

/// Classify `attribute` of content type `uid`.
///
/// A relation without a declared nature takes it from `associations`; if
/// that knows nothing either, the relation is treated as to-one.
pub fn classify<'a>(
    uid: &str,
    name: &str,
    attribute: &'a AttributeDescriptor,
    associations: &dyn AssociationMetadata,
) -> Classified<'a> {
    match &attribute.kind {
        AttributeKind::Scalar { scalar, unique } => Classified::Scalar {
            scalar: *scalar,
            unique: *unique,
        },
        AttributeKind::Enumeration { values, enum_name } => Classified::Enumeration {
            values,
            enum_name: enum_name.as_deref(),
        },
        AttributeKind::Relation(relation) => {
            let nature = relation
                .nature
                .or_else(|| associations.relation_nature(uid, name));
            if nature.is_none() {
                tracing::debug!(uid, attribute = name, "relation nature unknown, assuming to-one");
            }
            let to_many = nature.is_some_and(RelationNature::is_to_many);
            match relation.target.as_deref() {
                Some(target) if !relation.polymorphic => Classified::Relation {
                    target,
                    relation,
                    to_many,
                },
                _ => Classified::Morph { to_many },
            }
        }
        AttributeKind::Component {
            component,
            repeatable,
        } => Classified::Component {
            component,
            repeatable: *repeatable,
        },
        AttributeKind::DynamicZone { components } => Classified::DynamicZone { components },
    }
}

pub fn is_scalar(attribute: &AttributeDescriptor) -> bool {
    matches!(attribute.kind, AttributeKind::Scalar { .. })
}

pub fn is_enumeration(attribute: &AttributeDescriptor) -> bool {
    matches!(attribute.kind, AttributeKind::Enumeration { .. })
}

pub fn is_relation(attribute: &AttributeDescriptor) -> bool {
    matches!(&attribute.kind, AttributeKind::Relation(r) if !r.polymorphic)
}

pub fn is_morph_relation(attribute: &AttributeDescriptor) -> bool {
    matches!(&attribute.kind, AttributeKind::Relation(r) if r.polymorphic)
}

pub fn is_component(attribute: &AttributeDescriptor) -> bool {
    matches!(attribute.kind, AttributeKind::Component { .. })
}

pub fn is_dynamic_zone(attribute: &AttributeDescriptor) -> bool {
    matches!(attribute.kind, AttributeKind::DynamicZone { .. })
}

/// Whether the attribute is left out of the schema entirely.
pub fn is_hidden(attribute: &AttributeDescriptor) -> bool {
    attribute.private
        || matches!(
            attribute.kind,
            AttributeKind::Scalar {
                scalar: ScalarKind::Password,
                ..
            }
        )
}

/// Scalar or enumeration: filterable through a scalar filter input.
pub fn is_filterable_leaf(attribute: &AttributeDescriptor) -> bool {
    is_scalar(attribute) || is_enumeration(attribute)
}
