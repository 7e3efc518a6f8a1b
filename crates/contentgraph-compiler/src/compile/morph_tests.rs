use indoc::indoc;
use serde_json::json;

use crate::compile::{MorphPass, SchemaCompiler};
use crate::registry::DefinitionKind;
use crate::test_utils::{MORPH, RecordingResolvers, compile, content_types, dump};
use crate::types::TypeDefinition;

#[test]
fn morph_union_lists_back_links() {
    let types = content_types(MORPH);
    let schema = compile(&types);

    let res = dump(&schema, &["Comment", "Post", "CommentTargetMorph"]);

    insta::assert_snapshot!(res, @r"
    type Comment {  # content-type api::comment.comment
      body: String
      target: CommentTargetMorph
    }

    type Post {  # content-type api::post.post
      comments: [Comment!]!
    }

    union CommentTargetMorph = Post  # morph api::comment.comment:target
    ");
}

#[test]
fn morph_union_resolves_by_type_key() {
    let types = content_types(MORPH);
    let schema = compile(&types);

    let union = schema
        .get("CommentTargetMorph")
        .and_then(TypeDefinition::as_union)
        .unwrap();
    assert_eq!(union.discriminator, "__type");
    assert_eq!(
        union.resolve_type(&json!({ "__type": "api::post.post", "id": 1 })),
        Some("Post")
    );
    assert_eq!(union.resolve_type(&json!({ "__type": "api::tag.tag" })), None);
    assert_eq!(union.resolve_type(&json!({ "id": 1 })), None);
}

#[test]
fn unions_wait_for_the_morph_pass() {
    let types = content_types(MORPH);
    let resolvers = RecordingResolvers::all_for(&types);

    let first = SchemaCompiler::new(&types, &resolvers).first_pass().unwrap();
    assert!(!first.registry().has("CommentTargetMorph"));
    assert!(first.registry().has("Post"));
    assert_eq!(first.pending().len(), 1);
    assert_eq!(first.pending()[0].union_name, "CommentTargetMorph");
    assert_eq!(first.pending()[0].attribute, "target");

    let schema = MorphPass::from(first).run().unwrap();
    assert!(schema.registry().has("CommentTargetMorph"));
}

#[test]
fn members_do_not_depend_on_declaration_order() {
    let types = content_types(indoc! {r#"
        [
            {
                "uid": "api::comment.comment",
                "modelName": "comment",
                "kind": "collectionType",
                "attributes": { "target": { "type": "relation", "relation": "morphToMany" } }
            },
            {
                "uid": "api::video.video",
                "modelName": "video",
                "kind": "collectionType",
                "attributes": {
                    "comments": { "type": "relation", "relation": "oneToMany", "target": "api::comment.comment" }
                }
            },
            {
                "uid": "shared.gallery",
                "modelName": "gallery",
                "kind": "component",
                "attributes": {
                    "pinned": { "type": "relation", "relation": "oneToOne", "target": "api::comment.comment" }
                }
            },
            {
                "uid": "api::article.article",
                "modelName": "article",
                "kind": "collectionType",
                "attributes": {
                    "comments": { "type": "relation", "relation": "oneToMany", "target": "api::comment.comment" }
                }
            }
        ]
    "#});
    let schema = compile(&types);

    insta::assert_snapshot!(dump(&schema, &["Comment", "CommentTargetMorph"]), @r"
    type Comment {  # content-type api::comment.comment
      target: [CommentTargetMorph!]!
    }

    union CommentTargetMorph = Article | Gallery | Video  # morph api::comment.comment:target
    ");
}

#[test]
fn target_uid_decides_membership() {
    let types = content_types(indoc! {r#"
        [
            {
                "uid": "plugin::upload.file",
                "modelName": "file",
                "kind": "collectionType",
                "plugin": "upload",
                "attributes": {
                    "name": { "type": "string" },
                    "related": { "type": "relation", "relation": "morphToMany" }
                }
            },
            {
                "uid": "api::article.article",
                "modelName": "article",
                "kind": "collectionType",
                "attributes": {
                    "cover": {
                        "type": "relation",
                        "relation": "oneToOne",
                        "target": "plugin::upload.file",
                        "plugin": "upload"
                    }
                }
            },
            {
                "uid": "api::post.post",
                "modelName": "post",
                "kind": "collectionType",
                "attributes": {
                    "cover": { "type": "relation", "relation": "oneToOne", "target": "plugin::upload.file" }
                }
            },
            {
                "uid": "api::banner.banner",
                "modelName": "banner",
                "kind": "collectionType",
                "attributes": {
                    "image": {
                        "type": "relation",
                        "relation": "oneToOne",
                        "target": "plugin::upload.file",
                        "plugin": "i18n"
                    }
                }
            }
        ]
    "#});
    let schema = compile(&types);

    let union = schema
        .get("FileRelatedMorph")
        .and_then(TypeDefinition::as_union)
        .unwrap();
    let members: Vec<_> = union.members.iter().map(|m| m.type_name.as_str()).collect();
    assert_eq!(members, ["Article", "Post"]);
}

#[test]
fn no_back_links_gives_empty_union() {
    let types = content_types(indoc! {r#"
        [{
            "uid": "api::comment.comment",
            "modelName": "comment",
            "kind": "collectionType",
            "attributes": {
                "target": { "type": "relation", "relation": "morphToOne", "required": true }
            }
        }]
    "#});
    let schema = compile(&types);

    insta::assert_snapshot!(dump(&schema, &["Comment", "CommentTargetMorph"]), @r"
    type Comment {  # content-type api::comment.comment
      target: CommentTargetMorph!
    }

    union CommentTargetMorph  # morph api::comment.comment:target
    ");
}

#[test]
fn morph_definitions_are_tagged() {
    let types = content_types(MORPH);
    let schema = compile(&types);

    let morphs: Vec<_> = schema
        .registry()
        .select(|p| p.kind == DefinitionKind::Morph)
        .map(|(name, _, prov)| (name, prov.attribute.as_deref()))
        .collect();
    assert_eq!(morphs, [("CommentTargetMorph", Some("target"))]);
}

#[test]
fn morph_attributes_are_not_filterable() {
    let types = content_types(MORPH);
    let schema = compile(&types);

    let filters = schema
        .get("CommentFiltersInput")
        .and_then(TypeDefinition::as_input)
        .unwrap();
    assert!(!filters.fields.contains_key("target"));
    assert!(filters.fields.contains_key("body"));
}
