//! Query entry points.
//!
//! Each content type contributes a `Query` extension named `{Base}Queries`.
//! A field is only added when the resolver registry knows its action.

use contentgraph_core::{AttributeKind, ContentTypeDescriptor, ModelKind};
use indexmap::IndexMap;

use crate::classify::is_hidden;
use crate::naming::{
    entity_response_collection_name, entity_response_name, filters_input_name,
    find_one_query_name, find_query_name, queries_name,
};
use crate::registry::{DefinitionKind, Provenance};
use crate::scalars::{ID, PAGINATION_ARG, PUBLICATION_STATE, schema_scalar};
use crate::types::{Field, FieldResolver, QueryBinding, QueryKind, TypeDefinition, TypeExtension, TypeRef};

use super::compiler::SchemaCompiler;
use super::error::{CompileError, CompileResult};

pub const QUERY_ROOT: &str = "Query";

/// Resolver action for a content type, e.g. `api::article.article.find`.
pub fn action_name(ct: &ContentTypeDescriptor, action: &str) -> String {
    format!("{}.{action}", ct.uid)
}

fn query_field(ct: &ContentTypeDescriptor, action: String, kind: QueryKind, ty: TypeRef) -> Field {
    Field::new(ty).resolver(FieldResolver::Query(QueryBinding {
        action,
        kind,
        content_type: ct.uid.clone(),
    }))
}

/// `findOne`: `id` plus one argument per public unique scalar.
fn find_one_field(ct: &ContentTypeDescriptor, action: String) -> Field {
    let mut field = query_field(
        ct,
        action,
        QueryKind::FindOne,
        TypeRef::named(entity_response_name(ct)),
    )
    .arg("id", TypeRef::named(ID));

    for (name, attr) in &ct.attributes {
        if is_hidden(attr) {
            continue;
        }
        if let AttributeKind::Scalar {
            scalar,
            unique: true,
        } = attr.kind
            && let Some(scalar) = schema_scalar(scalar)
        {
            field = field.arg(name.clone(), TypeRef::named(scalar));
        }
    }
    field
}

fn find_many_field(ct: &ContentTypeDescriptor, action: String) -> Field {
    query_field(
        ct,
        action,
        QueryKind::FindMany,
        TypeRef::named(entity_response_collection_name(ct)),
    )
    .arg("filters", TypeRef::named(filters_input_name(ct)))
    .arg("pagination", TypeRef::named(PAGINATION_ARG))
    .arg("sort", TypeRef::named("String").list())
    .arg("publicationState", TypeRef::named(PUBLICATION_STATE))
    .arg("locale", TypeRef::named("String"))
}

fn find_single_field(ct: &ContentTypeDescriptor, action: String) -> Field {
    query_field(
        ct,
        action,
        QueryKind::FindSingle,
        TypeRef::named(entity_response_name(ct)),
    )
    .arg("publicationState", TypeRef::named(PUBLICATION_STATE))
}

impl SchemaCompiler<'_> {
    pub(super) fn register_queries(&mut self, ct: &ContentTypeDescriptor) -> CompileResult<()> {
        let mut fields = IndexMap::new();

        match ct.kind {
            ModelKind::CollectionType => {
                let action = action_name(ct, "findOne");
                if self.resolvers.exists(&action) {
                    fields.insert(find_one_query_name(ct), find_one_field(ct, action));
                }
                let action = action_name(ct, "find");
                if self.resolvers.exists(&action) {
                    let name = find_query_name(ct);
                    if fields.contains_key(&name) {
                        return Err(CompileError::DuplicateField {
                            type_name: QUERY_ROOT.to_string(),
                            field: name,
                        });
                    }
                    fields.insert(name, find_many_field(ct, action));
                }
            }
            ModelKind::SingleType => {
                let action = action_name(ct, "find");
                if self.resolvers.exists(&action) {
                    fields.insert(find_query_name(ct), find_single_field(ct, action));
                }
            }
            ModelKind::Component => return Ok(()),
        }

        if fields.is_empty() {
            tracing::debug!(uid = %ct.uid, "no resolver actions, no queries");
            return Ok(());
        }

        for field in fields.keys() {
            if self.query_fields.contains_key(field) {
                return Err(CompileError::DuplicateField {
                    type_name: QUERY_ROOT.to_string(),
                    field: field.clone(),
                });
            }
        }
        for field in fields.keys() {
            self.query_fields.insert(field.clone(), ct.uid.clone());
        }

        self.registry.register(
            queries_name(ct),
            TypeDefinition::Extension(TypeExtension {
                extends: QUERY_ROOT.to_string(),
                fields,
            }),
            Provenance::content_type(DefinitionKind::Query, ct),
        )?;
        Ok(())
    }
}
