//! Mapping from description type names to TypeScript type labels

/// Label for `integer` and `double`
pub const NUMBER: &str = "number";
/// Label for an unstructured `object`
pub const OBJECT: &str = "Object";
/// Label for an `array` without a referenced item type
pub const ARRAY: &str = "Array";
/// Label for a missing type
pub const ANY: &str = "any";

/// Maps a raw type name to its TypeScript label.
///
/// Used for model properties and operation parameters alike. Names that are
/// not part of the description vocabulary (model and enum names included)
/// pass through unchanged.
///
/// # Examples
/// ```
/// use swagger2ts::generation::type_mapper::map_type;
///
/// assert_eq!(map_type(Some("integer")), "number");
/// assert_eq!(map_type(Some("Pet")), "Pet");
/// assert_eq!(map_type(None), "any");
/// ```
pub fn map_type(raw: Option<&str>) -> String {
    match raw {
        Some("integer") | Some("double") => NUMBER.to_string(),
        Some("object") => OBJECT.to_string(),
        Some("array") => ARRAY.to_string(),
        None | Some("") => ANY.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Whether a parameter of this type has to be stringified before it is
/// placed in a URL, query string or header.
pub fn needs_string_conversion(raw: Option<&str>) -> bool {
    matches!(raw, Some("integer") | Some("double") | Some("boolean"))
}
