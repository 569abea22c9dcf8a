//! Feature identifier normalization.
//!
//! The server identifies features as `<layerName>.<localId>`. Callers only
//! ever see `<localId>`; update filters need the qualified form again.

/// Separator between layer name and local identifier.
pub const ID_SEPARATOR: char = '.';

/// Strips the layer prefix from a server identifier.
///
/// Returns the substring after the first separator, or the input unchanged
/// when there is no separator.
///
/// # Example
///
/// ```
/// use wfsync::feature::normalize_feature_id;
///
/// assert_eq!(normalize_feature_id("fire_hydrants.1"), "1");
/// assert_eq!(normalize_feature_id("42"), "42");
/// ```
pub fn normalize_feature_id(raw: &str) -> &str {
    raw.split_once(ID_SEPARATOR)
        .map(|(_, local)| local)
        .unwrap_or(raw)
}

/// Builds the fully-qualified `<layerName>.<localId>` identifier.
///
/// Identifiers that already carry the `<layerName>.` prefix are returned as-is.
pub fn qualify_feature_id(layer_name: &str, local_id: &str) -> String {
    let already_qualified = local_id
        .strip_prefix(layer_name)
        .is_some_and(|rest| rest.starts_with(ID_SEPARATOR));
    if already_qualified {
        local_id.to_string()
    } else {
        format!("{}{}{}", layer_name, ID_SEPARATOR, local_id)
    }
}
