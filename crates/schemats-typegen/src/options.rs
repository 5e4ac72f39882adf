//! Generation options.

use serde::Deserialize;

/// Options threaded through every generation call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypegenOptions {
    /// Prefix applied to every declared name (`User` -> `IUser`).
    pub naming_prefix: String,
    /// Expand `$ref`s into inline structural types instead of naming them.
    pub inline_ref: bool,
    /// Emit `export` on every declaration.
    pub export: bool,
    /// Bind fallback aliases to their mapped type instead of `any`.
    pub typed_aliases: bool,
}

impl Default for TypegenOptions {
    fn default() -> Self {
        Self {
            naming_prefix: "I".to_string(),
            inline_ref: false,
            export: true,
            typed_aliases: false,
        }
    }
}

impl TypegenOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            naming_prefix: prefix.into(),
            ..Default::default()
        }
    }

    pub fn inline() -> Self {
        Self {
            inline_ref: true,
            ..Default::default()
        }
    }

    /// Declared name for a top-level schema.
    pub fn declared_name(&self, name: &str) -> String {
        format!("{}{}", self.naming_prefix, name)
    }
}
