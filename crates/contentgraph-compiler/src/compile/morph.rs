//! Second pass: polymorphic relation unions.
//!
//! A morph union for `(owner, attribute)` has one member per other content
//! type or component whose non-polymorphic relations point back at the owner
//! (same target uid, and same plugin when the relation names one). Membership is read from registry
//! provenance, so it only runs once the first pass has registered every base
//! type.

use crate::registry::{DefinitionKind, Provenance};
use crate::types::{TypeDefinition, UnionType};

use super::compiler::{CompiledSchema, FirstPass, MorphRequest};
use super::error::CompileResult;

/// The morph pass, constructible only from a finished first pass.
#[derive(Debug)]
pub struct MorphPass {
    first: FirstPass,
}

impl From<FirstPass> for MorphPass {
    fn from(first: FirstPass) -> Self {
        Self { first }
    }
}

impl MorphPass {
    /// Member type names and uids for one request, sorted by type name so
    /// visitation order does not leak into the union.
    fn back_links(&self, request: &MorphRequest) -> Vec<(String, String)> {
        let owner = &request.owner;
        let mut members: Vec<(String, String)> = self
            .first
            .registry
            .select(|p| {
                matches!(p.kind, DefinitionKind::ContentType | DefinitionKind::Component)
                    && p.origin.as_ref().is_some_and(|o| {
                        o.uid != owner.uid && o.relates_to(&owner.uid, owner.plugin.as_deref())
                    })
            })
            .filter_map(|(name, _, prov)| Some((name.to_string(), prov.origin_uid()?.to_string())))
            .collect();
        members.sort();
        members
    }

    pub fn run(mut self) -> CompileResult<CompiledSchema> {
        let pending = std::mem::take(&mut self.first.pending);

        for request in &pending {
            let members = self.back_links(request);
            if members.is_empty() {
                tracing::warn!(
                    uid = %request.owner.uid,
                    attribute = %request.attribute,
                    union = %request.union_name,
                    "no content type links back to this polymorphic relation, union is empty"
                );
            }

            let mut union = UnionType::new(self.first.config.morph_discriminator.clone());
            for (type_name, uid) in members {
                union = union.member(type_name, uid);
            }

            self.first.registry.register(
                request.union_name.clone(),
                TypeDefinition::Union(union),
                Provenance {
                    kind: DefinitionKind::Morph,
                    origin: Some(request.owner.clone()),
                    attribute: Some(request.attribute.clone()),
                },
            )?;
        }

        tracing::info!(
            definitions = self.first.registry.len(),
            morph_unions = pending.len(),
            "schema compiled"
        );

        Ok(CompiledSchema {
            registry: self.first.registry,
            config: self.first.config,
        })
    }
}
