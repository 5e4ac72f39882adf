//! Identifier sanitization for enum members and object keys.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of characters that cannot appear in an identifier (hyphens, spaces, ...).
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// A lowercase letter or digit followed by an uppercase letter.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Turn an enum value into a SCREAMING_SNAKE member name.
///
/// `"user-name"` and `"userName"` both become `USER_NAME`; a leading digit is
/// prefixed with `_` (`"2fa"` becomes `_2FA`).
pub fn sanitize_enum_member(raw: &str) -> String {
    let separated = SEPARATORS.replace_all(raw.trim(), "_");
    let split = WORD_BOUNDARY.replace_all(&separated, "${1}_${2}");

    let mut ident = String::with_capacity(split.len() + 1);
    match split.chars().next() {
        None => ident.push('_'),
        Some(c) if c.is_ascii_digit() => ident.push('_'),
        Some(_) => {}
    }
    ident.push_str(&split.to_uppercase());
    ident
}

/// Make a property name safe as an object type key.
///
/// Bare identifiers are returned unchanged, everything else is quoted.
pub fn sanitize_object_key(raw: &str) -> String {
    if BARE_KEY.is_match(raw) {
        raw.to_string()
    } else {
        quote(raw)
    }
}

/// Double-quoted string literal with JSON escapes.
pub(crate) fn quote(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}
