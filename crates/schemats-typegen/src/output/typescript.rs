//! TypeScript declaration emitter.
//!
//! Each top-level schema becomes exactly one declaration. The declaration
//! kind is picked by a fixed decision table, first match wins:
//!
//! | schema                          | declaration                    |
//! |---------------------------------|--------------------------------|
//! | `enum`                          | `enum IName { MEMBER = "v", }` |
//! | `oneOf` / `anyOf`               | `type IName = A \| B;`         |
//! | `allOf`                         | `type IName = A & B;`          |
//! | `type: object` or `properties`  | `interface IName { ... }`      |
//! | anything else                   | `type IName = any;`            |

use crate::expr::{Field, TypeExpr, render_object};
use crate::ident::{quote, sanitize_enum_member};
use crate::mapper::TypeMapper;
use crate::options::TypegenOptions;
use crate::schema::{Schema, SchemaMap};
use rayon::prelude::*;
use serde_json::Value;

/// A rendered-ready top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Enum {
        name: String,
        members: Vec<EnumMember>,
    },
    Union {
        name: String,
        members: Vec<TypeExpr>,
    },
    Intersection {
        name: String,
        members: Vec<TypeExpr>,
    },
    Interface {
        name: String,
        fields: Vec<Field>,
    },
    Alias {
        name: String,
        ty: TypeExpr,
    },
}

/// A member of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Sanitized member identifier.
    pub name: String,
    /// Member initializer, the original value as a literal.
    pub value: String,
}

impl EnumMember {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(raw) => Self {
                name: sanitize_enum_member(raw),
                value: quote(raw),
            },
            Value::Number(number) => Self {
                name: sanitize_enum_member(&number.to_string()),
                value: number.to_string(),
            },
            other => {
                let raw = other.to_string();
                Self {
                    name: sanitize_enum_member(&raw),
                    value: quote(&raw),
                }
            }
        }
    }
}

impl Declaration {
    /// Declared (prefixed) name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Enum { name, .. }
            | Declaration::Union { name, .. }
            | Declaration::Intersection { name, .. }
            | Declaration::Interface { name, .. }
            | Declaration::Alias { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Enum { .. } => "enum",
            Declaration::Union { .. } => "union",
            Declaration::Intersection { .. } => "intersection",
            Declaration::Interface { .. } => "interface",
            Declaration::Alias { .. } => "alias",
        }
    }

    pub fn render(&self, export: bool) -> String {
        let export = if export { "export " } else { "" };
        match self {
            Declaration::Enum { name, members } if members.is_empty() => {
                format!("{}enum {} {{}}", export, name)
            }
            Declaration::Enum { name, members } => {
                let body: Vec<String> = members
                    .iter()
                    .map(|m| format!("  {} = {},", m.name, m.value))
                    .collect();
                format!("{}enum {} {{\n{}\n}}", export, name, body.join("\n"))
            }
            Declaration::Union { name, members } => {
                format!(
                    "{}type {} = {};",
                    export,
                    name,
                    TypeExpr::Union(members.clone())
                )
            }
            Declaration::Intersection { name, members } => {
                format!(
                    "{}type {} = {};",
                    export,
                    name,
                    TypeExpr::Intersection(members.clone())
                )
            }
            Declaration::Interface { name, fields } => {
                format!(
                    "{}interface {} {}",
                    export,
                    name,
                    render_object(fields, 0, true)
                )
            }
            Declaration::Alias { name, ty } => format!("{}type {} = {};", export, name, ty),
        }
    }
}

/// Decide the declaration for one top-level schema.
pub fn build_declaration<'a>(
    name: &'a str,
    schema: &'a Schema,
    schemas: &'a SchemaMap,
    options: &'a TypegenOptions,
) -> Declaration {
    let declared = options.declared_name(name);
    let mut mapper = TypeMapper::for_declaration(name, schemas, options);

    if let Some(values) = schema.enum_values() {
        return Declaration::Enum {
            name: declared,
            members: values.iter().map(EnumMember::from_value).collect(),
        };
    }

    if let Some(members) = schema.union_members() {
        return Declaration::Union {
            name: declared,
            members: members.iter().map(|m| member_type(&mut mapper, m)).collect(),
        };
    }

    if let Some(members) = schema.intersection_members() {
        return Declaration::Intersection {
            name: declared,
            members: members.iter().map(|m| member_type(&mut mapper, m)).collect(),
        };
    }

    if schema.is_object_shaped() {
        return Declaration::Interface {
            name: declared,
            fields: mapper.object_fields(schema),
        };
    }

    let ty = if options.typed_aliases {
        mapper.map_type(Some(schema))
    } else {
        TypeExpr::Any
    };
    Declaration::Alias { name: declared, ty }
}

/// Type of one union/intersection member: the declared name for a reference,
/// otherwise the braced inline object.
fn member_type<'a>(mapper: &mut TypeMapper<'a>, member: &'a Schema) -> TypeExpr {
    match &member.reference {
        Some(reference) => mapper.reference_name(reference),
        None => mapper.inline_object(member),
    }
}

/// Emit the declaration text for one top-level schema.
pub fn emit_declaration(
    name: &str,
    schema: &Schema,
    schemas: &SchemaMap,
    options: &TypegenOptions,
) -> String {
    let declaration = build_declaration(name, schema, schemas, options);
    tracing::debug!(
        name = declaration.name(),
        kind = declaration.kind(),
        "emitting declaration"
    );
    declaration.render(options.export)
}

/// Emit every schema in mapping order, declarations separated by a blank line.
///
/// Declarations are independent, so they are built on the rayon pool and
/// collected back in input order.
pub fn generate_typescript_types(schemas: &SchemaMap, options: &TypegenOptions) -> String {
    let entries: Vec<(&String, &Schema)> = schemas.iter().collect();
    let blocks: Vec<String> = entries
        .par_iter()
        .map(|(name, schema)| emit_declaration(name, schema, schemas, options))
        .collect();
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schemas(value: serde_json::Value) -> SchemaMap {
        serde_json::from_value(value).unwrap()
    }

    fn emit_one(value: serde_json::Value) -> String {
        emit_with(value, &TypegenOptions::default())
    }

    fn emit_with(value: serde_json::Value, options: &TypegenOptions) -> String {
        let all = schemas(json!({ "X": value }));
        emit_declaration("X", &all["X"], &all, options)
    }

    #[test]
    fn enum_declaration() {
        assert_eq!(
            emit_one(json!({ "type": "string", "enum": ["user-name", "2fa", "inProgress"] })),
            "export enum IX {\n  USER_NAME = \"user-name\",\n  _2FA = \"2fa\",\n  IN_PROGRESS = \"inProgress\",\n}"
        );
    }

    #[test]
    fn numeric_enum_declaration() {
        assert_eq!(
            emit_one(json!({ "type": "integer", "enum": [1, 2] })),
            "export enum IX {\n  _1 = 1,\n  _2 = 2,\n}"
        );
    }

    #[test]
    fn enum_wins_over_one_of() {
        let text = emit_one(json!({
            "enum": ["a"],
            "oneOf": [{ "$ref": "#/components/schemas/Other" }]
        }));
        assert_eq!(text, "export enum IX {\n  A = \"a\",\n}");
    }

    #[test]
    fn union_declaration() {
        let text = emit_one(json!({
            "oneOf": [
                { "$ref": "#/components/schemas/Cat" },
                { "properties": { "bark": { "type": "boolean" } }, "required": ["bark"] },
                { "type": "string" }
            ]
        }));
        assert_eq!(
            text,
            "export type IX = ICat | {\n  bark: boolean;\n} | {};"
        );
    }

    #[test]
    fn any_of_matches_one_of() {
        let one_of = emit_one(json!({ "oneOf": [{ "type": "string" }, { "type": "number" }] }));
        let any_of = emit_one(json!({ "anyOf": [{ "type": "string" }, { "type": "number" }] }));
        assert_eq!(one_of, "export type IX = {} | {};");
        assert_eq!(one_of, any_of);
    }

    #[test]
    fn typed_members_render_as_objects() {
        let all = schemas(json!({
            "X": {
                "allOf": [
                    { "type": "array", "items": { "type": "string" } },
                    { "$ref": "#/components/schemas/Z" }
                ]
            },
            "Z": { "type": "object" }
        }));
        let text = emit_declaration("X", &all["X"], &all, &TypegenOptions::default());
        assert_eq!(text, "export type IX = {} & IZ;");
        assert_eq!(
            emit_one(json!({ "oneOf": [{ "type": "string", "enum": ["a"] }, { "anyOf": [{ "type": "number" }] }] })),
            "export type IX = {} | {};"
        );
    }

    #[test]
    fn untyped_union_member_is_empty_object() {
        assert_eq!(
            emit_one(json!({ "oneOf": [{}, { "type": "object" }] })),
            "export type IX = {} | {};"
        );
    }

    #[test]
    fn union_members_stay_named_when_inlining() {
        let all = schemas(json!({
            "X": { "oneOf": [{ "$ref": "#/components/schemas/Y" }] },
            "Y": { "type": "string" }
        }));
        let text = emit_declaration("X", &all["X"], &all, &TypegenOptions::inline());
        assert_eq!(text, "export type IX = IY;");
    }

    #[test]
    fn intersection_declaration() {
        let text = emit_one(json!({
            "allOf": [
                { "$ref": "#/components/schemas/Base" },
                { "type": "object", "properties": { "id": { "type": "integer" } } }
            ]
        }));
        assert_eq!(text, "export type IX = IBase & {\n  id?: number;\n};");
    }

    #[test]
    fn interface_declaration() {
        let text = emit_one(json!({
            "type": "object",
            "properties": { "a": { "type": "string" }, "b": { "type": "string" } },
            "required": ["a"]
        }));
        assert_eq!(text, "export interface IX {\n  a: string;\n  b?: string;\n}");
    }

    #[test]
    fn interface_without_properties() {
        assert_eq!(emit_one(json!({ "type": "object" })), "export interface IX {}");
        assert_eq!(emit_one(json!({ "properties": {} })), "export interface IX {}");
    }

    #[test]
    fn fallback_alias() {
        assert_eq!(emit_one(json!({})), "export type IX = any;");
        assert_eq!(emit_one(json!({ "type": "string" })), "export type IX = any;");
        assert_eq!(
            emit_one(json!({ "$ref": "#/components/schemas/Y" })),
            "export type IX = any;"
        );
    }

    #[test]
    fn typed_aliases() {
        let options = TypegenOptions {
            typed_aliases: true,
            ..Default::default()
        };
        assert_eq!(
            emit_with(json!({ "type": "string" }), &options),
            "export type IX = string;"
        );
        assert_eq!(
            emit_with(json!({ "type": "array", "items": { "$ref": "#/components/schemas/Y" } }), &options),
            "export type IX = IY[];"
        );
        assert_eq!(emit_with(json!({}), &options), "export type IX = any;");
    }

    #[test]
    fn prefix_and_export() {
        let options = TypegenOptions {
            naming_prefix: "Api".to_string(),
            export: false,
            ..Default::default()
        };
        assert_eq!(
            emit_with(json!({ "properties": { "next": { "$ref": "#/components/schemas/X" } } }), &options),
            "interface ApiX {\n  next?: ApiX;\n}"
        );
    }

    #[test]
    fn declarations_are_deterministic() {
        let value = json!({
            "allOf": [
                { "$ref": "#/components/schemas/A" },
                { "properties": { "tags": { "type": "array", "items": { "type": "string" } } } }
            ]
        });
        assert_eq!(emit_one(value.clone()), emit_one(value));
    }

    #[test]
    fn generate_joins_in_mapping_order() {
        let all = schemas(json!({
            "Zebra": { "type": "object" },
            "Apple": { "enum": ["red"] },
            "Mango": {}
        }));
        assert_eq!(
            generate_typescript_types(&all, &TypegenOptions::default()),
            "export interface IZebra {}\n\nexport enum IApple {\n  RED = \"red\",\n}\n\nexport type IMango = any;"
        );
    }

    #[test]
    fn generate_matches_sequential_emission() {
        let mut all = SchemaMap::new();
        for i in 0..64 {
            let schema: Schema = serde_json::from_value(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "next": { "$ref": format!("#/components/schemas/S{}", (i + 1) % 64) }
                },
                "required": ["id"]
            }))
            .unwrap();
            all.insert(format!("S{}", i), schema);
        }
        let options = TypegenOptions::default();

        let sequential: Vec<String> = all
            .iter()
            .map(|(name, schema)| emit_declaration(name, schema, &all, &options))
            .collect();
        assert_eq!(
            generate_typescript_types(&all, &options),
            sequential.join("\n\n")
        );
    }

    #[test]
    fn generate_empty_mapping() {
        assert_eq!(
            generate_typescript_types(&SchemaMap::new(), &TypegenOptions::default()),
            ""
        );
    }

    #[test]
    fn declaration_kinds() {
        let all = schemas(json!({
            "E": { "enum": ["a"] },
            "U": { "anyOf": [{ "type": "string" }] },
            "I": { "allOf": [{ "type": "string" }] },
            "O": { "type": "object" },
            "A": { "type": "boolean" }
        }));
        let options = TypegenOptions::default();
        let kinds: Vec<&str> = all
            .iter()
            .map(|(name, schema)| build_declaration(name, schema, &all, &options).kind())
            .collect();
        assert_eq!(kinds, ["enum", "union", "intersection", "interface", "alias"]);
    }
}
