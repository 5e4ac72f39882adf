//! Output backends for code generation.
//!
//! Each backend takes a [`SchemaMap`](crate::schema::SchemaMap) and produces
//! source text for its target language.

pub mod typescript;

pub use typescript::{
    Declaration, EnumMember, build_declaration, emit_declaration, generate_typescript_types,
};
