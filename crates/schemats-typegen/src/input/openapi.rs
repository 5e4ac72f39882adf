//! OpenAPI document reader.
//!
//! Extracts the schema mapping from `#/components/schemas` of an OpenAPI 3.x
//! document. A document without an `openapi` key is taken to be the schema
//! mapping itself.

use crate::schema::{Schema, SchemaMap};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("schema `{name}`: {source}")]
    Schema {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported document: {0}")]
    Unsupported(String),
}

/// Serialization of the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON when the text starts with `{`, YAML otherwise.
    #[default]
    Auto,
    Json,
    Yaml,
}

/// Parse document text into a schema mapping.
pub fn parse_str(text: &str, format: InputFormat) -> Result<SchemaMap, ParseError> {
    let format = match format {
        InputFormat::Auto if text.trim_start().starts_with('{') => InputFormat::Json,
        InputFormat::Auto => InputFormat::Yaml,
        other => other,
    };

    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml | InputFormat::Auto => serde_yaml::from_str(text)?,
    };
    parse_document(&value)
}

/// Extract the schema mapping from a parsed document.
pub fn parse_document(input: &Value) -> Result<SchemaMap, ParseError> {
    if input.get("swagger").is_some() {
        return Err(ParseError::Unsupported(
            "Swagger 2.0 documents are not supported (expected OpenAPI 3.x)".to_string(),
        ));
    }

    let Some(version) = input.get("openapi") else {
        return schema_map(input);
    };

    // YAML reads an unquoted `openapi: 3.0` as a number.
    let version = match version {
        Value::String(version) => version.clone(),
        other => other.to_string(),
    };
    if !version.starts_with("3.") {
        return Err(ParseError::Unsupported(format!(
            "OpenAPI version {} not supported (expected 3.x)",
            version
        )));
    }

    match input.pointer("/components/schemas") {
        Some(schemas) => schema_map(schemas),
        None => Ok(SchemaMap::new()),
    }
}

fn schema_map(value: &Value) -> Result<SchemaMap, ParseError> {
    let object = value.as_object().ok_or_else(|| {
        ParseError::Unsupported("expected a mapping of schema names to schemas".to_string())
    })?;

    let mut schemas = SchemaMap::with_capacity(object.len());
    for (name, definition) in object {
        let schema: Schema =
            serde_json::from_value(definition.clone()).map_err(|source| ParseError::Schema {
                name: name.clone(),
                source,
            })?;
        schemas.insert(name.clone(), schema);
    }
    Ok(schemas)
}
