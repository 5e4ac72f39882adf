//! `$ref` resolution against the schema mapping.

use crate::schema::{Schema, SchemaMap};

/// Structural prefix of a component schema reference.
pub const REF_PREFIX: &str = "#/components/schemas/";

/// Bare schema name of a reference token.
///
/// Tokens without [`REF_PREFIX`] are returned whole.
pub fn ref_target(reference: &str) -> &str {
    reference.strip_prefix(REF_PREFIX).unwrap_or(reference)
}

/// Declared type name a reference points at.
pub fn resolve_name(reference: &str, naming_prefix: &str) -> String {
    format!("{}{}", naming_prefix, ref_target(reference))
}

/// Schema a reference points at, if the mapping has it.
pub fn resolve_inline<'a>(reference: &str, schemas: &'a SchemaMap) -> Option<&'a Schema> {
    schemas.get(ref_target(reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;

    #[test]
    fn names() {
        assert_eq!(resolve_name("#/components/schemas/User", "I"), "IUser");
        assert_eq!(resolve_name("#/components/schemas/User", ""), "User");
        assert_eq!(resolve_name("#/definitions/User", "I"), "I#/definitions/User");
    }

    #[test]
    fn inline_lookup() {
        let mut schemas = SchemaMap::new();
        schemas.insert("Id".into(), Schema::of_kind(SchemaKind::String));

        let found = resolve_inline("#/components/schemas/Id", &schemas);
        assert_eq!(found, Some(&Schema::of_kind(SchemaKind::String)));
        assert!(resolve_inline("#/components/schemas/Missing", &schemas).is_none());
    }
}
