//! Per-content-type compilation: base object type, enums, dynamic zones and
//! filter inputs.

use std::collections::HashSet;

use contentgraph_core::{ContentTypeDescriptor, ModelKind};

use crate::classify::{Classified, classify, is_hidden};
use crate::naming::{
    dynamic_zone_input_name, dynamic_zone_name, enum_name, filters_input_name, morph_name,
    scalar_filter_input_name, type_name,
};
use crate::registry::{DefinitionKind, Origin, Provenance};
use crate::scalars::{ID, enum_definition, schema_scalar};
use crate::types::{
    Field, FieldResolver, InputObjectType, ObjectType, ScalarType, TypeDefinition, TypeRef,
    UnionType,
};

use super::compiler::{MorphRequest, SchemaCompiler};
use super::error::{CompileError, CompileResult};

const PUBLISHED_AT: &str = "publishedAt";

/// Filter input fields that every content type gets.
const FILTER_KEYWORDS: [&str; 4] = ["id", "and", "or", "not"];

/// Timestamp fields of a content type, `publishedAt` last when draft and
/// publish is enabled.
fn timestamp_fields(ct: &ContentTypeDescriptor) -> impl Iterator<Item = &str> {
    let published = ct.draft_and_publish.then_some(PUBLISHED_AT);
    ct.timestamps.iter().map(String::as_str).chain(published)
}

/// `[T!]!` for to-many links, otherwise `T` / `T!` by `required`.
fn link_type(name: String, to_many: bool, required: bool) -> TypeRef {
    let ty = TypeRef::named(name);
    if to_many {
        ty.non_null().list().non_null()
    } else {
        ty.required_if(required)
    }
}

impl<'a> SchemaCompiler<'a> {
    /// Build the base object type. Registers enums and dynamic zones, compiles
    /// referenced components, and records morph requests along the way.
    pub(super) fn build_object_type(
        &mut self,
        ct: &'a ContentTypeDescriptor,
    ) -> CompileResult<ObjectType> {
        let mut object = ObjectType::default();

        for (name, attr) in &ct.attributes {
            if is_hidden(attr) {
                tracing::debug!(uid = %ct.uid, attribute = %name, "skipping hidden attribute");
                continue;
            }

            let field = match classify(&ct.uid, name, attr, self.associations) {
                Classified::Scalar { scalar, .. } => {
                    let Some(scalar) = schema_scalar(scalar) else {
                        continue;
                    };
                    Field::new(TypeRef::named(scalar).required_if(attr.required))
                }

                Classified::Enumeration { values, enum_name: explicit } => {
                    let enum_type = enum_name(ct, name, explicit);
                    self.register_enum(ct, name, &enum_type, values)?;
                    Field::new(TypeRef::named(enum_type).required_if(attr.required))
                }

                Classified::Relation {
                    target, to_many, ..
                } => {
                    let Some(target_ct) = self.source.content_type(target) else {
                        tracing::warn!(
                            uid = %ct.uid,
                            attribute = %name,
                            target_uid = target,
                            "relation target is not a known content type, skipping"
                        );
                        continue;
                    };
                    Field::new(link_type(type_name(target_ct), to_many, attr.required)).resolver(
                        FieldResolver::Association {
                            content_type: ct.uid.clone(),
                            attribute: name.clone(),
                        },
                    )
                }

                Classified::Morph { to_many } => {
                    let union_name = morph_name(ct, name);
                    self.pending.push(MorphRequest {
                        owner: Origin::from_descriptor(ct),
                        attribute: name.clone(),
                        union_name: union_name.clone(),
                    });
                    Field::new(link_type(union_name, to_many, attr.required)).resolver(
                        FieldResolver::Morph {
                            content_type: ct.uid.clone(),
                            attribute: name.clone(),
                        },
                    )
                }

                Classified::Component {
                    component,
                    repeatable,
                } => {
                    let component_ct = self.component(ct, name, component)?;
                    let ty = TypeRef::named(type_name(component_ct));
                    let ty = if repeatable { ty.non_null().list() } else { ty };
                    Field::new(ty.required_if(attr.required)).resolver(FieldResolver::Component {
                        attribute: name.clone(),
                    })
                }

                Classified::DynamicZone { components } => {
                    if components.is_empty() {
                        tracing::debug!(
                            uid = %ct.uid,
                            attribute = %name,
                            "dynamic zone allows no components, skipping"
                        );
                        continue;
                    }
                    let union_name = self.register_dynamic_zone(ct, name, components)?;
                    let ty = TypeRef::named(union_name).non_null().list();
                    Field::new(ty.required_if(attr.required)).resolver(FieldResolver::DynamicZone {
                        attribute: name.clone(),
                    })
                }
            };

            object.add_field(name.clone(), field);
        }

        // Declared attributes of the same name take precedence, hidden or not.
        for timestamp in timestamp_fields(ct) {
            if !ct.attributes.contains_key(timestamp) {
                object.add_field(timestamp, Field::new(TypeRef::named("DateTime")));
            }
        }

        Ok(object)
    }

    pub(super) fn register_base_type(
        &mut self,
        ct: &ContentTypeDescriptor,
        object: ObjectType,
    ) -> CompileResult<()> {
        let kind = match ct.kind {
            ModelKind::Component => DefinitionKind::Component,
            ModelKind::CollectionType | ModelKind::SingleType => DefinitionKind::ContentType,
        };
        self.registry.register(
            type_name(ct),
            TypeDefinition::Object(object),
            Provenance::content_type(kind, ct),
        )?;
        Ok(())
    }

    /// Register an enum unless this very attribute already registered it.
    fn register_enum(
        &mut self,
        ct: &ContentTypeDescriptor,
        attribute: &str,
        name: &str,
        values: &[String],
    ) -> CompileResult<()> {
        if let Some(existing) = self.registry.get(name)
            && existing.provenance.kind == DefinitionKind::Enum
            && existing.provenance.is_for(&ct.uid, attribute)
        {
            return Ok(());
        }

        let definition = enum_definition(values);
        let mut seen = HashSet::with_capacity(definition.values.len());
        if let Some(duplicate) = definition.values.iter().find(|v| !seen.insert(v.name.as_str())) {
            return Err(CompileError::DuplicateEnumValue {
                enum_name: name.to_string(),
                value: duplicate.name.clone(),
            });
        }

        self.registry.register(
            name,
            TypeDefinition::Enum(definition),
            Provenance::content_type(DefinitionKind::Enum, ct).attribute(attribute),
        )?;
        Ok(())
    }

    /// Register a non-empty dynamic zone's union and input scalar.
    fn register_dynamic_zone(
        &mut self,
        ct: &'a ContentTypeDescriptor,
        attribute: &str,
        components: &'a [String],
    ) -> CompileResult<String> {
        let mut union = UnionType::new(self.config.dynamic_zone_discriminator.clone());
        for uid in components {
            let component_ct = self.component(ct, attribute, uid)?;
            union = union.member(type_name(component_ct), uid.clone());
        }

        let union_name = dynamic_zone_name(ct, attribute);
        self.registry.register(
            union_name.clone(),
            TypeDefinition::Union(union),
            Provenance::content_type(DefinitionKind::DynamicZone, ct).attribute(attribute),
        )?;
        self.registry.register(
            dynamic_zone_input_name(ct, attribute),
            TypeDefinition::Scalar(ScalarType {
                description: Some(format!("Input for the `{attribute}` dynamic zone")),
            }),
            Provenance::content_type(DefinitionKind::DynamicZoneInput, ct).attribute(attribute),
        )?;
        Ok(union_name)
    }

    /// Resolve a component reference, compiling the component on first use.
    fn component(
        &mut self,
        owner: &ContentTypeDescriptor,
        attribute: &str,
        uid: &str,
    ) -> CompileResult<&'a ContentTypeDescriptor> {
        let source = self.source;
        match source.content_type(uid) {
            Some(component) if component.is_component() => {
                self.compile_descriptor(component)?;
                Ok(component)
            }
            _ => Err(CompileError::UnknownComponentReference {
                content_type: owner.uid.clone(),
                attribute: attribute.to_string(),
                component: uid.to_string(),
            }),
        }
    }

    /// `{Base}FiltersInput`: id, filterable attributes, relations, timestamps,
    /// and the logical combinators.
    pub(super) fn register_filters(&mut self, ct: &ContentTypeDescriptor) -> CompileResult<()> {
        let name = filters_input_name(ct);
        let mut input = InputObjectType::default()
            .field("id", TypeRef::named(scalar_filter_input_name(ID)));

        for (attr_name, attr) in &ct.attributes {
            if is_hidden(attr) {
                continue;
            }
            let ty = match classify(&ct.uid, attr_name, attr, self.associations) {
                Classified::Scalar { scalar, .. } => match schema_scalar(scalar) {
                    Some(scalar) => scalar_filter_input_name(scalar),
                    None => continue,
                },
                Classified::Enumeration { .. } => scalar_filter_input_name("String"),
                Classified::Relation { target, .. } => match self.source.content_type(target) {
                    Some(target_ct) if !target_ct.is_component() => filters_input_name(target_ct),
                    _ => continue,
                },
                Classified::Morph { .. }
                | Classified::Component { .. }
                | Classified::DynamicZone { .. } => continue,
            };
            if FILTER_KEYWORDS.contains(&attr_name.as_str()) {
                return Err(CompileError::DuplicateField {
                    type_name: name,
                    field: attr_name.clone(),
                });
            }
            input = input.field(attr_name.clone(), TypeRef::named(ty));
        }

        for timestamp in timestamp_fields(ct) {
            if !ct.attributes.contains_key(timestamp) {
                input = input.field(timestamp, TypeRef::named(scalar_filter_input_name("DateTime")));
            }
        }

        let input = input
            .field("and", TypeRef::named(name.clone()).list())
            .field("or", TypeRef::named(name.clone()).list())
            .field("not", TypeRef::named(name.clone()));

        self.registry.register(
            name,
            TypeDefinition::InputObject(input),
            Provenance::content_type(DefinitionKind::Filters, ct),
        )?;
        Ok(())
    }
}
