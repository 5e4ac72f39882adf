//! Input schema model.
//!
//! A [`Schema`] is one node of an OpenAPI component schema, reduced to the
//! vocabulary the generator understands. Every other keyword is ignored on
//! deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ordered mapping from declared name to schema.
///
/// Iteration order is the order of the input document and is the order
/// declarations are emitted in.
pub type SchemaMap = IndexMap<String, Schema>;

/// A single schema definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// The `type` keyword.
    #[serde(rename = "type", deserialize_with = "deserialize_kind")]
    pub kind: Option<SchemaKind>,
    /// Allowed literal values, in declared order.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Object properties, in declared order.
    pub properties: Option<IndexMap<String, Schema>>,
    /// Names of properties that must be present.
    pub required: Vec<String>,
    #[serde(rename = "oneOf")]
    pub one_of: Option<Vec<Schema>>,
    #[serde(rename = "anyOf")]
    pub any_of: Option<Vec<Schema>>,
    #[serde(rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,
    /// Reference to another top-level schema.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Element schema for arrays.
    pub items: Option<Box<Schema>>,
}

/// Value of the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Integer,
    Number,
    String,
    Boolean,
    Array,
    Object,
    /// Anything else, including non-string `type` values.
    Unknown,
}

impl SchemaKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "integer" => Self::Integer,
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Unknown,
        }
    }
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<SchemaKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(SchemaKind::from_name(&name)),
        Some(_) => Some(SchemaKind::Unknown),
    })
}

impl Schema {
    /// Non-empty `enum` values.
    pub fn enum_values(&self) -> Option<&[Value]> {
        non_empty(&self.enum_values)
    }

    /// Non-empty `enum` values on a `string` or untyped schema.
    pub fn string_enum_values(&self) -> Option<&[Value]> {
        match self.kind {
            None | Some(SchemaKind::String) => self.enum_values(),
            Some(_) => None,
        }
    }

    /// Union members: non-empty `oneOf`, else non-empty `anyOf`.
    pub fn union_members(&self) -> Option<&[Schema]> {
        non_empty(&self.one_of).or_else(|| non_empty(&self.any_of))
    }

    /// Non-empty `allOf` members.
    pub fn intersection_members(&self) -> Option<&[Schema]> {
        non_empty(&self.all_of)
    }

    /// `type: object`, or a `properties` mapping regardless of `type`.
    pub fn is_object_shaped(&self) -> bool {
        self.kind == Some(SchemaKind::Object) || self.properties.is_some()
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }

    /// A bare `{"type": ...}` schema.
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// A bare `{"$ref": ...}` schema.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }
}

fn non_empty<T>(values: &Option<Vec<T>>) -> Option<&[T]> {
    values.as_deref().filter(|v| !v.is_empty())
}
