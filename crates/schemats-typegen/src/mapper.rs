//! Schema to type expression mapping.
//!
//! [`TypeMapper`] walks a schema and produces a [`TypeExpr`]. Dispatch follows
//! a fixed precedence, first match wins:
//!
//! 1. `$ref` (named reference, or inline expansion with `inline_ref`)
//! 2. `enum` on a string or untyped schema (union of literal types)
//! 3. `oneOf` / `anyOf` (union)
//! 4. `allOf` (intersection)
//! 5. `type`, with object-shaped schemas rendered as inline object literals
//! 6. `any`

use crate::expr::{Field, TypeExpr, render_object};
use crate::ident::sanitize_object_key;
use crate::options::TypegenOptions;
use crate::resolve::{ref_target, resolve_inline, resolve_name};
use crate::schema::{Schema, SchemaKind, SchemaMap};
use serde_json::Value;

/// Maps schemas to type expressions against one schema mapping.
///
/// While expanding references inline the mapper tracks which schemas it is
/// inside of; a reference back into one of them is emitted by name.
pub struct TypeMapper<'a> {
    schemas: &'a SchemaMap,
    options: &'a TypegenOptions,
    expanding: Vec<&'a str>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(schemas: &'a SchemaMap, options: &'a TypegenOptions) -> Self {
        Self {
            schemas,
            options,
            expanding: Vec::new(),
        }
    }

    /// Mapper for the body of declaration `name`, which is never expanded into itself.
    pub fn for_declaration(
        name: &'a str,
        schemas: &'a SchemaMap,
        options: &'a TypegenOptions,
    ) -> Self {
        Self {
            schemas,
            options,
            expanding: vec![name],
        }
    }

    pub fn map_type(&mut self, schema: Option<&'a Schema>) -> TypeExpr {
        let Some(schema) = schema else {
            return TypeExpr::Any;
        };

        if let Some(reference) = &schema.reference {
            return self.map_reference(reference);
        }

        if let Some(values) = schema.string_enum_values() {
            return TypeExpr::Union(values.iter().map(literal).collect());
        }

        if let Some(members) = schema.union_members() {
            return TypeExpr::Union(members.iter().map(|m| self.map_type(Some(m))).collect());
        }

        if let Some(members) = schema.intersection_members() {
            return TypeExpr::Intersection(
                members.iter().map(|m| self.map_type(Some(m))).collect(),
            );
        }

        match schema.kind {
            Some(SchemaKind::Integer | SchemaKind::Number) => TypeExpr::Number,
            Some(SchemaKind::String) => TypeExpr::String,
            Some(SchemaKind::Boolean) => TypeExpr::Boolean,
            Some(SchemaKind::Array) => match schema.items.as_deref() {
                Some(items) => TypeExpr::array(self.map_type(Some(items))),
                None => TypeExpr::array(TypeExpr::Any),
            },
            Some(SchemaKind::Object) if schema.properties.is_none() => TypeExpr::Record,
            Some(SchemaKind::Object) => self.inline_object(schema),
            Some(SchemaKind::Unknown) | None if schema.properties.is_some() => {
                self.inline_object(schema)
            }
            Some(SchemaKind::Unknown) | None => TypeExpr::Any,
        }
    }

    /// Inline object literal for an object-shaped schema (`{}` without properties).
    pub fn inline_object(&mut self, schema: &'a Schema) -> TypeExpr {
        TypeExpr::Object(self.object_fields(schema))
    }

    /// One field per property, in declared order.
    pub fn object_fields(&mut self, schema: &'a Schema) -> Vec<Field> {
        let Some(properties) = &schema.properties else {
            return Vec::new();
        };
        properties
            .iter()
            .map(|(name, property)| Field {
                key: sanitize_object_key(name),
                optional: !schema.is_required(name),
                ty: self.map_type(Some(property)),
            })
            .collect()
    }

    /// Declared name of a reference, regardless of `inline_ref`.
    pub fn reference_name(&self, reference: &str) -> TypeExpr {
        TypeExpr::Named(resolve_name(reference, &self.options.naming_prefix))
    }

    fn map_reference(&mut self, reference: &'a str) -> TypeExpr {
        let target = ref_target(reference);

        if !self.options.inline_ref {
            if !self.schemas.contains_key(target) {
                tracing::warn!(reference, "reference to unknown schema");
            }
            return self.reference_name(reference);
        }

        if self.expanding.contains(&target) {
            tracing::debug!(reference, "reference cycle, keeping named reference");
            return self.reference_name(reference);
        }

        let Some(resolved) = resolve_inline(reference, self.schemas) else {
            tracing::warn!(reference, "reference to unknown schema, expanding to empty object");
            return TypeExpr::Object(Vec::new());
        };

        self.expanding.push(target);
        let ty = self.map_type(Some(resolved));
        self.expanding.pop();
        ty
    }
}

/// Literal type for an enum value.
fn literal(value: &Value) -> TypeExpr {
    TypeExpr::Literal(value.to_string())
}

/// Map one schema to type expression text.
pub fn map_type(schema: Option<&Schema>, schemas: &SchemaMap, options: &TypegenOptions) -> String {
    TypeMapper::new(schemas, options).map_type(schema).to_string()
}

/// Render an object-shaped schema as an inline object literal.
///
/// Without properties this is always `{}`; otherwise `with_braces` controls
/// whether the field lines are wrapped.
pub fn render_inline_object(
    schema: &Schema,
    schemas: &SchemaMap,
    with_braces: bool,
    options: &TypegenOptions,
) -> String {
    let fields = TypeMapper::new(schemas, options).object_fields(schema);
    render_object(&fields, 0, with_braces)
}
