//! TypeScript declaration generation from OpenAPI component schemas.
//!
//! `schemats-typegen` maps a set of JSON-Schema-shaped definitions (the
//! `components/schemas` section of an OpenAPI 3.x document) to TypeScript
//! `enum`, `type` and `interface` declarations.
//!
//! # Architecture
//!
//! ```text
//! Input                 Model             Mapping                 Output
//! ──────────────     ────────────     ─────────────────     ──────────────────
//! OpenAPI (JSON) ─┐                   ┌─ resolve ($ref)
//! OpenAPI (YAML) ─┼─> SchemaMap ──────┼─ mapper (TypeExpr) ──> declarations
//! bare mapping   ─┘   (schema.rs)     └─ ident (sanitize)      (output/typescript.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use schemats_typegen::{TypegenOptions, generate_typescript_types, parse_document};
//!
//! let document = serde_json::json!({
//!     "openapi": "3.0.3",
//!     "components": {
//!         "schemas": {
//!             "User": {
//!                 "type": "object",
//!                 "properties": {
//!                     "id": { "type": "integer" },
//!                     "name": { "type": "string" }
//!                 },
//!                 "required": ["id"]
//!             }
//!         }
//!     }
//! });
//!
//! let schemas = parse_document(&document).unwrap();
//! let ts = generate_typescript_types(&schemas, &TypegenOptions::default());
//! assert_eq!(ts, "export interface IUser {\n  id: number;\n  name?: string;\n}");
//! ```

pub mod expr;
pub mod ident;
pub mod input;
pub mod mapper;
pub mod options;
pub mod output;
pub mod resolve;
pub mod schema;

pub use expr::TypeExpr;
pub use ident::{sanitize_enum_member, sanitize_object_key};
pub use input::{InputFormat, ParseError, parse_document, parse_str};
pub use mapper::{TypeMapper, map_type, render_inline_object};
pub use options::TypegenOptions;
pub use output::{Declaration, emit_declaration, generate_typescript_types};
pub use resolve::{resolve_inline, resolve_name};
pub use schema::{Schema, SchemaKind, SchemaMap};
