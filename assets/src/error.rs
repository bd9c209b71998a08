use std::fmt;

/// Errors that can occur while resolving, reading, or writing assets.
#[derive(Debug)]
pub enum AssetError {
    /// No asset exists under the requested key.
    NotFound(String),
    /// An IO error occurred in a source backend.
    Io(std::io::Error),
    /// The key is malformed (empty, or contains `..`).
    InvalidKey(String),
    /// No source is mounted under the key's first segment.
    NoSuchSource(String),
    /// The source does not support write operations.
    ReadOnly,
    /// The asset exists but its contents are not valid UTF-8 text.
    NotText(std::str::Utf8Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(key) => write!(f, "asset not found: {key}"),
            AssetError::Io(err) => write!(f, "IO error: {err}"),
            AssetError::InvalidKey(reason) => write!(f, "invalid asset key: {reason}"),
            AssetError::NoSuchSource(name) => write!(f, "no such asset source: {name}"),
            AssetError::ReadOnly => write!(f, "asset source is read-only"),
            AssetError::NotText(err) => write!(f, "asset is not valid UTF-8 text: {err}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::NotText(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(err.to_string())
        } else {
            AssetError::Io(err)
        }
    }
}
