//! Identifier normalization utilities for code generation
//!
//! Schema, property and operation names coming out of a description document
//! use every casing convention under the sun. These helpers turn them into the
//! identifiers used for generated TypeScript classes, enums and files.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that split a raw name into tokens.
const DELIMITERS: [char; 4] = ['-', '.', ' ', '_'];

/// Decorative brackets used by some generators to spell generic type names
/// (e.g. `Page«Pet»`).
const DECORATIONS: [char; 2] = ['«', '»'];

/// Uppercases the first character of `token`, leaving the rest untouched.
///
/// # Examples
/// ```
/// use swagger2ts::generation::utils::capitalize;
///
/// assert_eq!(capitalize("pet"), "Pet");
/// assert_eq!(capitalize("petStore"), "PetStore");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a delimited name into a PascalCase identifier.
///
/// The input is split on `-`, `.`, ` ` and `_`; every token gets its first
/// character capitalized and the tokens are concatenated. Names without any
/// delimiter are returned unchanged, so `petStore` stays `petStore` rather
/// than becoming `PetStore`.
///
/// # Examples
/// ```
/// use swagger2ts::generation::utils::normalize;
///
/// assert_eq!(normalize("pet-store"), "PetStore");
/// assert_eq!(normalize("api.v1_order item"), "ApiV1OrderItem");
/// assert_eq!(normalize("petStore"), "petStore");
/// ```
pub fn normalize(raw: &str) -> String {
    if !raw.contains(DELIMITERS) {
        return raw.to_string();
    }

    raw.split(DELIMITERS).map(capitalize).collect()
}

/// Strips decorative bracket characters from a schema name.
///
/// # Examples
/// ```
/// use swagger2ts::generation::utils::sanitize;
///
/// assert_eq!(sanitize("Page«Pet»"), "PagePet");
/// ```
pub fn sanitize(name: &str) -> String {
    name.chars().filter(|c| !DECORATIONS.contains(c)).collect()
}

/// Canonical identifier for a schema name: sanitized, then normalized.
pub fn canonical_name(raw: &str) -> String {
    normalize(&sanitize(raw))
}

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid"));

/// Whether `name` can be used as a TypeScript identifier (and so as a file stem).
///
/// # Examples
/// ```
/// use swagger2ts::generation::utils::is_identifier;
///
/// assert!(is_identifier("PetStore"));
/// assert!(!is_identifier("../Pet"));
/// assert!(!is_identifier("3d"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Property key as written in an interface body: bare when it is an
/// identifier, a quoted string literal otherwise.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        serde_json::Value::from(name).to_string()
    }
}

/// Turns an arbitrary enum literal into a member identifier.
///
/// Characters outside the identifier set become `_`; a leading digit (or an
/// empty result) gets a `_` prefix.
pub fn member_identifier(text: &str) -> String {
    let mut member: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if member.is_empty() || member.starts_with(|c: char| c.is_ascii_digit()) {
        member.insert(0, '_');
    }
    member
}
