//! Translation of query filters into the persistence layer's filter language.
//!
//! - `operators`: public and internal operator names
//! - `translate`: the recursive, relation-aware rewrite

mod operators;
mod translate;


pub use operators::Operator;
pub use translate::FilterTranslator;

/// Filter validation errors. Raised only in strict mode; permissive
/// translation drops the offending key instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("{content_type}: unknown filter key `{key}`")]
    UnresolvedKey { content_type: String, key: String },

    #[error("{content_type}: filter `{key}` expects {expected}")]
    InvalidValue {
        content_type: String,
        key: String,
        expected: &'static str,
    },

    #[error("unknown content type `{0}`")]
    UnknownContentType(String),
}
