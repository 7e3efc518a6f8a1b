//! Resolver registry interface and query execution envelopes.
//!
//! The compiler never talks to storage. Query fields are bound to resolver
//! actions (`{uid}.{action}`); executing a field translates its filters,
//! invokes the action, and shapes the raw result into the response envelope.

use contentgraph_core::ContentTypeSource;
use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::compile::CompiledSchema;
use crate::filters::{FilterError, FilterTranslator};
use crate::types::{FieldResolver, QueryKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("resolver `{action}` failed: {message}")]
pub struct ResolverError {
    pub action: String,
    pub message: String,
}

impl ResolverError {
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("unknown query field `{0}`")]
    UnknownQuery(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Host-provided resolver actions.
pub trait ResolverRegistry {
    fn exists(&self, action: &str) -> bool;
    /// Run an action. Returns a raw entry, a list of raw entries, or `null`.
    fn invoke(&self, action: &str, args: Value) -> Result<Value, ResolverError>;
}

type Handler = Box<dyn Fn(Value) -> Result<Value, ResolverError>>;

/// Resolver registry backed by closures.
#[derive(Default)]
pub struct ResolverTable {
    handlers: IndexMap<String, Handler>,
}

impl ResolverTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, action: impl Into<String>, handler: F)
    where
        F: Fn(Value) -> Result<Value, ResolverError> + 'static,
    {
        self.handlers.insert(action.into(), Box::new(handler));
    }

    pub fn with<F>(mut self, action: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ResolverError> + 'static,
    {
        self.register(action, handler);
        self
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl ResolverRegistry for ResolverTable {
    fn exists(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    fn invoke(&self, action: &str, args: Value) -> Result<Value, ResolverError> {
        match self.handlers.get(action) {
            Some(handler) => handler(args),
            None => Err(ResolverError::new(action, "no such action")),
        }
    }
}

/// Claims every action and answers `null`. For inspecting the full schema
/// without a storage layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllResolvers;

impl ResolverRegistry for AcceptAllResolvers {
    fn exists(&self, _action: &str) -> bool {
        true
    }

    fn invoke(&self, _action: &str, _args: Value) -> Result<Value, ResolverError> {
        Ok(Value::Null)
    }
}

/// What a query execution needs from the host.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub source: &'a dyn ContentTypeSource,
    pub resolvers: &'a dyn ResolverRegistry,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(source: &'a dyn ContentTypeSource, resolvers: &'a dyn ResolverRegistry) -> Self {
        Self { source, resolvers }
    }
}

/// `{ id, attributes }` for a raw entry; `null` stays `null`.
pub fn to_entity(raw: Value) -> Value {
    if raw.is_null() {
        return Value::Null;
    }
    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    json!({ "id": id, "attributes": raw })
}

pub fn to_entity_response(raw: Value) -> Value {
    json!({ "data": to_entity(raw) })
}

/// `data` plus zeroed pagination; the resolver layer fills in real counts.
pub fn to_entity_response_collection(raw: Vec<Value>) -> Value {
    let data: Vec<Value> = raw.into_iter().map(to_entity).collect();
    json!({
        "data": data,
        "meta": {
            "pagination": { "total": 0, "page": 0, "pageSize": 0, "pageCount": 0 }
        }
    })
}

impl CompiledSchema {
    /// Execute a `Query` field with `args` (an object or `null`).
    pub fn execute(
        &self,
        field: &str,
        args: &Value,
        ctx: &ExecutionContext<'_>,
    ) -> Result<Value, ExecutionError> {
        let definition = self
            .query_field(field)
            .ok_or_else(|| ExecutionError::UnknownQuery(field.to_string()))?;
        let FieldResolver::Query(binding) = &definition.resolver else {
            return Err(ExecutionError::UnknownQuery(field.to_string()));
        };

        let empty = Map::new();
        let args = match args {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => {
                return Err(ExecutionError::InvalidArguments(
                    "arguments must be an object".to_string(),
                ));
            }
        };
        if let Some(unknown) = args.keys().find(|k| !definition.args.contains_key(*k)) {
            return Err(ExecutionError::InvalidArguments(format!(
                "`{field}` has no argument `{unknown}`"
            )));
        }

        let ct = ctx
            .source
            .content_type(&binding.content_type)
            .ok_or_else(|| FilterError::UnknownContentType(binding.content_type.clone()))?;
        let translator = FilterTranslator::new(ctx.source, self.config.filter_mode);

        tracing::debug!(field, action = %binding.action, "executing query");

        match binding.kind {
            QueryKind::FindOne => {
                if args.is_empty() {
                    return Err(ExecutionError::InvalidArguments(format!(
                        "`{field}` needs `id` or a unique attribute"
                    )));
                }
                let filters: Map<String, Value> = args
                    .iter()
                    .map(|(k, v)| (k.clone(), json!({ "$eq": v })))
                    .collect();
                let raw = ctx
                    .resolvers
                    .invoke(&binding.action, json!({ "filters": filters }))?;
                Ok(to_entity_response(raw))
            }
            QueryKind::FindMany => {
                let mut resolver_args = args.clone();
                if let Some(filters) = args.get("filters") {
                    resolver_args.insert("filters".to_string(), translator.translate(filters, ct)?);
                }
                let raw = ctx
                    .resolvers
                    .invoke(&binding.action, Value::Object(resolver_args))?;
                let entries = match raw {
                    Value::Null => Vec::new(),
                    Value::Array(entries) => entries,
                    other => vec![other],
                };
                Ok(to_entity_response_collection(entries))
            }
            QueryKind::FindSingle => {
                let raw = ctx
                    .resolvers
                    .invoke(&binding.action, Value::Object(args.clone()))?;
                Ok(to_entity_response(raw))
            }
        }
    }
}
