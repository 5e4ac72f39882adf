//! TypeScript type expressions.

use std::fmt;

const INDENT: &str = "  ";

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Any,
    Number,
    String,
    Boolean,
    /// Literal type, already rendered (`"active"`, `3`, `true`).
    Literal(String),
    /// A declared type name.
    Named(String),
    /// `T[]`
    Array(Box<TypeExpr>),
    /// `Record<string, any>`
    Record,
    /// Inline object literal type.
    Object(Vec<Field>),
    /// `A | B`
    Union(Vec<TypeExpr>),
    /// `A & B`
    Intersection(Vec<TypeExpr>),
}

/// One property of an inline object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Key, already sanitized.
    pub key: String,
    pub optional: bool,
    pub ty: TypeExpr,
}

impl TypeExpr {
    pub fn array(item: TypeExpr) -> Self {
        Self::Array(Box::new(item))
    }

    /// Render at the given nesting depth; nested objects indent relative to it.
    pub fn render(&self, depth: usize) -> String {
        match self {
            TypeExpr::Any => "any".to_string(),
            TypeExpr::Number => "number".to_string(),
            TypeExpr::String => "string".to_string(),
            TypeExpr::Boolean => "boolean".to_string(),
            TypeExpr::Record => "Record<string, any>".to_string(),
            TypeExpr::Literal(text) | TypeExpr::Named(text) => text.clone(),
            TypeExpr::Array(item) => {
                let inner = item.render(depth);
                if item.is_compound() {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            TypeExpr::Object(fields) => render_object(fields, depth, true),
            TypeExpr::Union(members) if members.is_empty() => "never".to_string(),
            TypeExpr::Union(members) => members
                .iter()
                .map(|m| m.render(depth))
                .collect::<Vec<_>>()
                .join(" | "),
            TypeExpr::Intersection(members) if members.is_empty() => "unknown".to_string(),
            TypeExpr::Intersection(members) => members
                .iter()
                .map(|m| match m {
                    TypeExpr::Union(inner) if inner.len() > 1 => format!("({})", m.render(depth)),
                    _ => m.render(depth),
                })
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }

    /// Union or intersection of more than one member.
    fn is_compound(&self) -> bool {
        match self {
            TypeExpr::Union(members) | TypeExpr::Intersection(members) => members.len() > 1,
            _ => false,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Render object fields, one `key?: type;` line each.
///
/// Fields are indented one level deeper than `depth`; the closing brace sits
/// at `depth`.
pub fn render_object(fields: &[Field], depth: usize, with_braces: bool) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }

    let indent = INDENT.repeat(depth + 1);
    let lines: Vec<String> = fields
        .iter()
        .map(|field| {
            format!(
                "{}{}{}: {};",
                indent,
                field.key,
                if field.optional { "?" } else { "" },
                field.ty.render(depth + 1)
            )
        })
        .collect();

    if with_braces {
        format!("{{\n{}\n{}}}", lines.join("\n"), INDENT.repeat(depth))
    } else {
        lines.join("\n")
    }
}
