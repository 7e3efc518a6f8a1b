use contentgraph_core::{AttributeDescriptor, ContentTypeDescriptor, ModelKind, RelationNature};

use crate::config::BatchRegistration;
use crate::registry::{
    DefinitionKind, Origin, Provenance, RegistryError, RelationTarget, TypeRegistry,
};
use crate::types::{ScalarType, TypeDefinition};

fn scalar() -> TypeDefinition {
    TypeDefinition::Scalar(ScalarType::default())
}

fn batch(names: &[&str]) -> Vec<(String, TypeDefinition)> {
    names.iter().map(|n| (n.to_string(), scalar())).collect()
}

#[test]
fn register_preserves_insertion_order() {
    let mut registry = TypeRegistry::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        registry
            .register(name, scalar(), Provenance::internal(DefinitionKind::Scalar))
            .unwrap();
    }
    assert_eq!(registry.types(), ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn register_rejects_duplicate_name() {
    let mut registry = TypeRegistry::new();
    let prov = Provenance::internal(DefinitionKind::Scalar);
    registry.register("JSON", scalar(), prov.clone()).unwrap();

    let err = registry.register("JSON", scalar(), prov).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateTypeName {
            name: "JSON".into()
        }
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn delete_keeps_order_of_remaining() {
    let mut registry = TypeRegistry::new();
    registry
        .register_many(batch(&["A", "B", "C"]), Provenance::internal(DefinitionKind::Scalar))
        .unwrap();

    assert!(registry.delete("B").is_some());
    assert!(!registry.has("B"));
    assert_eq!(registry.types(), ["A", "C"]);
    assert!(registry.delete("B").is_none());
}

#[test]
fn sequential_batch_keeps_prior_insertions() {
    let mut registry = TypeRegistry::new();
    let prov = Provenance::internal(DefinitionKind::Scalar);
    registry.register("B", scalar(), prov.clone()).unwrap();

    let err = registry.register_many(batch(&["A", "B", "C"]), prov).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateTypeName { name: "B".into() });
    assert_eq!(registry.types(), ["B", "A"]);
}

#[test]
fn atomic_batch_registers_nothing_on_conflict() {
    let mut registry = TypeRegistry::with_batch_mode(BatchRegistration::Atomic);
    let prov = Provenance::internal(DefinitionKind::Scalar);
    registry.register("B", scalar(), prov.clone()).unwrap();

    let err = registry
        .register_many(batch(&["A", "B", "C"]), prov.clone())
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateTypeName { name: "B".into() });
    assert_eq!(registry.types(), ["B"]);

    let err = registry.register_many(batch(&["X", "X"]), prov).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateTypeName { name: "X".into() });
    assert_eq!(registry.types(), ["B"]);
}

#[test]
fn select_filters_by_provenance() {
    let author = ContentTypeDescriptor::new("api::author.author", "author", ModelKind::CollectionType);
    let article = ContentTypeDescriptor::new("api::article.article", "article", ModelKind::CollectionType)
        .attribute(
            "author",
            AttributeDescriptor::relation(RelationNature::ManyToOne, "api::author.author"),
        );

    let mut registry = TypeRegistry::new();
    registry
        .register("JSON", scalar(), Provenance::internal(DefinitionKind::Scalar))
        .unwrap();
    registry
        .register(
            "Author",
            scalar(),
            Provenance::content_type(DefinitionKind::ContentType, &author),
        )
        .unwrap();
    registry
        .register(
            "Article",
            scalar(),
            Provenance::content_type(DefinitionKind::ContentType, &article),
        )
        .unwrap();

    let linking: Vec<_> = registry
        .select(|p| {
            p.origin
                .as_ref()
                .is_some_and(|o| o.relates_to("api::author.author", None))
        })
        .map(|(name, _, _)| name)
        .collect();
    assert_eq!(linking, ["Article"]);

    let content_types = registry
        .select(|p| p.kind == DefinitionKind::ContentType)
        .count();
    assert_eq!(content_types, 2);
}

#[test]
fn provenance_is_for_attribute() {
    let article = ContentTypeDescriptor::new("api::article.article", "article", ModelKind::CollectionType);
    let prov = Provenance::content_type(DefinitionKind::Enum, &article).attribute("status");
    assert!(prov.is_for("api::article.article", "status"));
    assert!(!prov.is_for("api::article.article", "Status"));
    assert!(!prov.is_for("api::other.other", "status"));
}

#[test]
fn relation_plugin_only_constrains_when_named() {
    let origin = Origin {
        uid: "api::post.post".into(),
        plugin: None,
        model_kind: ModelKind::CollectionType,
        relations: vec![
            RelationTarget {
                attribute: "cover".into(),
                target: "plugin::upload.file".into(),
                plugin: None,
            },
            RelationTarget {
                attribute: "avatar".into(),
                target: "plugin::users-permissions.user".into(),
                plugin: Some("i18n".into()),
            },
        ],
    };

    assert!(origin.relates_to("plugin::upload.file", Some("upload")));
    assert!(origin.relates_to("plugin::upload.file", None));
    assert!(!origin.relates_to("plugin::users-permissions.user", Some("users-permissions")));
    assert!(!origin.relates_to("api::article.article", None));
}
