//! Schema compilation.
//!
//! # Module Organization
//!
//! - `compiler`: compiler state, phase types, compiled schema
//! - `content_type`: base object types, enums, dynamic zones, filter inputs
//! - `entity`: entity and response envelopes
//! - `queries`: `Query` extensions bound to resolver actions
//! - `morph`: second pass building polymorphic unions

mod compiler;
mod content_type;
mod entity;
mod error;
mod morph;
mod queries;

#[cfg(test)]
mod morph_tests;

pub use compiler::{CompiledSchema, FirstPass, MorphRequest, SchemaCompiler};
pub use error::{CompileError, CompileResult};
pub use morph::MorphPass;
pub use queries::{QUERY_ROOT, action_name};
