use crate::error::AssetError;

/// Normalizes an asset key to forward slashes without empty or `.` segments.
///
/// Keys must be relative. `..` segments are rejected so a key can never
/// escape the source it is routed to.
pub fn normalize(key: &str) -> Result<String, AssetError> {
    let replaced = key.replace('\\', "/");
    let mut segments = Vec::new();
    for segment in replaced.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            return Err(AssetError::InvalidKey(format!(
                "parent traversal is not allowed: {key}"
            )));
        }
        segments.push(segment);
    }
    if segments.is_empty() {
        return Err(AssetError::InvalidKey("empty key".to_string()));
    }
    Ok(segments.join("/"))
}

/// Splits a normalized key into its first segment and the remainder.
pub(crate) fn split_source(key: &str) -> (&str, &str) {
    match key.split_once('/') {
        Some((source, rest)) => (source, rest),
        None => (key, ""),
    }
}
