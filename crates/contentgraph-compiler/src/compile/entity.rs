//! Entity and response envelopes.
//!
//! - `{Base}Entity`: `id: ID`, `attributes: {Base}`
//! - `{Base}EntityResponse`: `data: {Base}Entity`
//! - `{Base}EntityResponseCollection`: `data: [{Base}Entity!]!`,
//!   `meta: ResponseCollectionMeta!`

use contentgraph_core::{ContentTypeDescriptor, ModelKind};

use crate::naming::{
    entity_name, entity_response_collection_name, entity_response_name, type_name,
};
use crate::registry::{DefinitionKind, Provenance};
use crate::scalars::{ID, RESPONSE_COLLECTION_META};
use crate::types::{Field, ObjectType, TypeDefinition, TypeRef};

use super::compiler::SchemaCompiler;
use super::error::CompileResult;

fn object<const N: usize>(fields: [(&str, TypeRef); N]) -> TypeDefinition {
    let mut object = ObjectType::default();
    for (name, ty) in fields {
        object.add_field(name, Field::new(ty));
    }
    TypeDefinition::Object(object)
}

impl SchemaCompiler<'_> {
    /// Collection types get all three envelopes, single types entity and
    /// response, components none.
    pub(super) fn register_entities(&mut self, ct: &ContentTypeDescriptor) -> CompileResult<()> {
        if ct.kind == ModelKind::Component {
            return Ok(());
        }

        let entity = entity_name(ct);
        self.registry.register(
            entity.clone(),
            object([
                ("id", TypeRef::named(ID)),
                ("attributes", TypeRef::named(type_name(ct))),
            ]),
            Provenance::content_type(DefinitionKind::Entity, ct),
        )?;

        self.registry.register(
            entity_response_name(ct),
            object([("data", TypeRef::named(entity.clone()))]),
            Provenance::content_type(DefinitionKind::EntityResponse, ct),
        )?;

        if ct.kind == ModelKind::CollectionType {
            self.registry.register(
                entity_response_collection_name(ct),
                object([
                    ("data", TypeRef::named(entity).non_null().list().non_null()),
                    (
                        "meta",
                        TypeRef::named(RESPONSE_COLLECTION_META).non_null(),
                    ),
                ]),
                Provenance::content_type(DefinitionKind::EntityResponseCollection, ct),
            )?;
        }
        Ok(())
    }
}
