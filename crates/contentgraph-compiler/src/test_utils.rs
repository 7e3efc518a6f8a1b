//! Test fixtures and an in-memory resolver registry.

use std::cell::RefCell;

use contentgraph_core::ContentTypes;
use indexmap::IndexMap;
use serde_json::Value;

use crate::compile::{CompileResult, CompiledSchema, SchemaCompiler};
use crate::config::CompilerConfig;
use crate::execute::{ResolverError, ResolverRegistry};

/// Article with a unique title and a many-to-one author.
pub const BLOG: &str = r#"[
    {
        "uid": "api::article.article",
        "modelName": "article",
        "kind": "collectionType",
        "info": { "singularName": "article", "pluralName": "articles" },
        "attributes": {
            "title": { "type": "string", "unique": true },
            "name": { "type": "string" },
            "author": { "type": "relation", "relation": "manyToOne", "target": "api::author.author" }
        }
    },
    {
        "uid": "api::author.author",
        "modelName": "author",
        "kind": "collectionType",
        "info": { "singularName": "author", "pluralName": "authors" },
        "attributes": {
            "name": { "type": "string", "required": true },
            "articles": { "type": "relation", "relation": "oneToMany", "target": "api::article.article" }
        }
    }
]"#;

/// Comment with a polymorphic `target`; Post links back to Comment.
pub const MORPH: &str = r#"[
    {
        "uid": "api::comment.comment",
        "modelName": "comment",
        "kind": "collectionType",
        "attributes": {
            "body": { "type": "text" },
            "target": { "type": "relation", "relation": "morphToOne" }
        }
    },
    {
        "uid": "api::post.post",
        "modelName": "post",
        "kind": "collectionType",
        "attributes": {
            "comments": { "type": "relation", "relation": "oneToMany", "target": "api::comment.comment" }
        }
    },
    {
        "uid": "api::tag.tag",
        "modelName": "tag",
        "kind": "collectionType",
        "attributes": {
            "label": { "type": "string" }
        }
    }
]"#;

pub fn content_types(json: &str) -> ContentTypes {
    ContentTypes::from_json(json).unwrap()
}

/// Resolver registry that knows a fixed set of actions, returns canned
/// responses, and records every invocation.
#[derive(Default)]
pub struct RecordingResolvers {
    responses: IndexMap<String, Value>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl RecordingResolvers {
    /// Knows `findOne` and `find` for every non-component in `types`.
    pub fn all_for(types: &ContentTypes) -> Self {
        let mut this = Self::default();
        for ct in types.content_types() {
            for action in ["findOne", "find"] {
                this.responses
                    .insert(format!("{}.{action}", ct.uid), Value::Null);
            }
        }
        this
    }

    pub fn with_actions<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: actions.into_iter().map(|a| (a.into(), Value::Null)).collect(),
            calls: RefCell::default(),
        }
    }

    pub fn respond(mut self, action: &str, response: Value) -> Self {
        self.responses.insert(action.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

impl ResolverRegistry for RecordingResolvers {
    fn exists(&self, action: &str) -> bool {
        self.responses.contains_key(action)
    }

    fn invoke(&self, action: &str, args: Value) -> Result<Value, ResolverError> {
        self.calls.borrow_mut().push((action.to_string(), args));
        self.responses
            .get(action)
            .cloned()
            .ok_or_else(|| ResolverError::new(action, "unknown action"))
    }
}

pub fn try_compile(types: &ContentTypes, config: CompilerConfig) -> CompileResult<CompiledSchema> {
    let resolvers = RecordingResolvers::all_for(types);
    SchemaCompiler::new(types, &resolvers).config(config).compile()
}

pub fn compile(types: &ContentTypes) -> CompiledSchema {
    try_compile(types, CompilerConfig::default()).unwrap()
}

/// Dump only the named definitions, with provenance.
pub fn dump(schema: &CompiledSchema, names: &[&str]) -> String {
    schema
        .dumper()
        .provenance(true)
        .only(names.iter().copied())
        .dump()
}
