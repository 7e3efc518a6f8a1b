//! Recursive filter translation.
//!
//! ```text
//! { name: { eq: "x" }, author: { id: { eq: 3 } } }
//!   => { name: { $eq: "x" }, author: { id: { $eq: 3 } } }
//! ```
//!
//! The output mirrors the input: every logical node and every leaf maps to
//! exactly one node at the same depth. Only operator names change.

use contentgraph_core::{AttributeKind, ContentTypeDescriptor, ContentTypeSource};
use serde_json::{Map, Value};

use crate::classify::{is_filterable_leaf, is_hidden};
use crate::config::FilterMode;

use super::FilterError;
use super::operators::Operator;

const PUBLISHED_AT: &str = "publishedAt";

/// What a filter key refers to on a content type.
enum KeyTarget<'a> {
    /// `id`, scalars, enumerations, timestamps: an operator object follows.
    Leaf,
    /// Nested filter on the related content type.
    Relation(&'a ContentTypeDescriptor),
    Unresolved,
}

fn invalid(ct: &ContentTypeDescriptor, key: &str, expected: &'static str) -> FilterError {
    FilterError::InvalidValue {
        content_type: ct.uid.clone(),
        key: key.to_string(),
        expected,
    }
}

fn unresolved(ct: &ContentTypeDescriptor, key: String) -> FilterError {
    FilterError::UnresolvedKey {
        content_type: ct.uid.clone(),
        key,
    }
}

/// Rewrites query filters against a content-type source.
#[derive(Clone, Copy)]
pub struct FilterTranslator<'a> {
    source: &'a dyn ContentTypeSource,
    mode: FilterMode,
}

impl<'a> FilterTranslator<'a> {
    pub fn new(source: &'a dyn ContentTypeSource, mode: FilterMode) -> Self {
        Self { source, mode }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Translate a filter tree for content type `ct`. `null` passes through.
    pub fn translate(&self, filter: &Value, ct: &ContentTypeDescriptor) -> Result<Value, FilterError> {
        match filter {
            Value::Null => Ok(Value::Null),
            Value::Object(node) => Ok(Value::Object(self.translate_node(node, ct)?)),
            _ => {
                self.reject(invalid(ct, "filters", "an object"))?;
                Ok(Value::Object(Map::new()))
            }
        }
    }

    /// Translate for the content type with the given uid.
    pub fn translate_for(&self, filter: &Value, uid: &str) -> Result<Value, FilterError> {
        let ct = self
            .source
            .content_type(uid)
            .ok_or_else(|| FilterError::UnknownContentType(uid.to_string()))?;
        self.translate(filter, ct)
    }

    /// In strict mode, fail. Otherwise log and let the caller drop the key.
    fn reject(&self, err: FilterError) -> Result<(), FilterError> {
        match self.mode {
            FilterMode::Strict => Err(err),
            FilterMode::Permissive => {
                tracing::debug!(%err, "dropping filter key");
                Ok(())
            }
        }
    }

    fn resolve_key(&self, ct: &ContentTypeDescriptor, key: &str) -> KeyTarget<'a> {
        if key == "id" {
            return KeyTarget::Leaf;
        }

        if let Some(attr) = ct.attributes.get(key) {
            if is_hidden(attr) {
                return KeyTarget::Unresolved;
            }
            if is_filterable_leaf(attr) {
                return KeyTarget::Leaf;
            }
            return match &attr.kind {
                AttributeKind::Relation(rel) if !rel.polymorphic => {
                    let target = rel
                        .target
                        .as_deref()
                        .and_then(|uid| self.source.content_type(uid));
                    match target {
                        Some(target) if !target.is_component() => KeyTarget::Relation(target),
                        _ => KeyTarget::Unresolved,
                    }
                }
                _ => KeyTarget::Unresolved,
            };
        }

        let timestamp = ct.timestamps.iter().any(|t| t == key)
            || (ct.draft_and_publish && key == PUBLISHED_AT);
        if timestamp {
            KeyTarget::Leaf
        } else {
            KeyTarget::Unresolved
        }
    }

    fn translate_node(
        &self,
        node: &Map<String, Value>,
        ct: &ContentTypeDescriptor,
    ) -> Result<Map<String, Value>, FilterError> {
        let mut out = Map::new();

        for (key, value) in node {
            match Operator::from_name(key) {
                Some(op @ (Operator::And | Operator::Or)) => {
                    let Value::Array(items) = value else {
                        self.reject(invalid(ct, key, "a list of filters"))?;
                        continue;
                    };
                    let mut children = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::Object(child) => {
                                children.push(Value::Object(self.translate_node(child, ct)?))
                            }
                            _ => self.reject(invalid(ct, key, "a list of filters"))?,
                        }
                    }
                    out.insert(op.internal_name().to_string(), Value::Array(children));
                    continue;
                }
                Some(Operator::Not) => {
                    match value {
                        Value::Object(child) => {
                            let child = self.translate_node(child, ct)?;
                            out.insert(Operator::Not.internal_name().to_string(), Value::Object(child));
                        }
                        _ => self.reject(invalid(ct, key, "a filter"))?,
                    }
                    continue;
                }
                _ => {}
            }

            match self.resolve_key(ct, key) {
                KeyTarget::Leaf => {
                    if let Some(ops) = self.translate_operators(value, ct, key)? {
                        out.insert(key.clone(), ops);
                    }
                }
                KeyTarget::Relation(target) => match value {
                    Value::Object(child) => {
                        out.insert(key.clone(), Value::Object(self.translate_node(child, target)?));
                    }
                    _ => self.reject(invalid(ct, key, "a nested filter"))?,
                },
                KeyTarget::Unresolved => self.reject(unresolved(ct, key.clone()))?,
            }
        }

        Ok(out)
    }

    /// `{ eq: 1, or: [{ lt: 0 }, { gt: 9 }] }` => `{ $eq: 1, $or: [{ $lt: 0 }, { $gt: 9 }] }`
    fn translate_operators(
        &self,
        value: &Value,
        ct: &ContentTypeDescriptor,
        key: &str,
    ) -> Result<Option<Value>, FilterError> {
        let Value::Object(ops) = value else {
            self.reject(invalid(ct, key, "an operator object"))?;
            return Ok(None);
        };

        let mut out = Map::new();
        for (name, operand) in ops {
            match Operator::from_name(name) {
                Some(op @ (Operator::And | Operator::Or)) => {
                    let Value::Array(items) = operand else {
                        self.reject(invalid(ct, key, "a list of operator objects"))?;
                        continue;
                    };
                    let mut children = Vec::with_capacity(items.len());
                    for item in items {
                        if let Some(child) = self.translate_operators(item, ct, key)? {
                            children.push(child);
                        }
                    }
                    out.insert(op.internal_name().to_string(), Value::Array(children));
                }
                Some(Operator::Not) => {
                    if let Some(child) = self.translate_operators(operand, ct, key)? {
                        out.insert(Operator::Not.internal_name().to_string(), child);
                    }
                }
                Some(op) => {
                    out.insert(op.internal_name().to_string(), operand.clone());
                }
                None => self.reject(unresolved(ct, format!("{key}.{name}")))?,
            }
        }
        Ok(Some(Value::Object(out)))
    }
}
