//! Document-level JSON encoding and decoding.
//!
//! Provides [`encode`] and [`decode`] functions that convert between
//! serde-serializable types and JSON text. Formatting is presentation
//! only; both shapes decode identically.

use super::error::{DeserializeError, SerializeError};

/// Output shape of an encoded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Single-line JSON (the default).
    #[default]
    Compact,
    /// Indented JSON for hand editing and diffs.
    Pretty,
}

/// Encode a serde-serializable value as JSON text in the given format.
pub fn encode<T: serde::Serialize>(value: &T, format: Format) -> Result<String, SerializeError> {
    let result = match format {
        Format::Compact => serde_json::to_string(value),
        Format::Pretty => serde_json::to_string_pretty(value),
    };
    result.map_err(|e| SerializeError::FormatError(e.to_string()))
}

/// Decode JSON text to a serde-deserializable type.
pub fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, DeserializeError> {
    serde_json::from_str(text).map_err(|e| DeserializeError::Malformed(e.to_string()))
}
