//! Asynchronous save and load of context documents.
//!
//! Text acquisition is the only awaited step: the document is read from
//! (or written to) an [`AssetRouter`] mount, and decoding plus entity
//! creation run synchronously on whatever thread resumes the future.
//! There is no queueing, cancellation, or retry here; callers that need
//! those wrap the futures themselves.

use std::fmt;

use firethorn_assets::{AssetError, AssetRouter};

use crate::registry::ContextRegistry;
use crate::serialize::{
    apply_context_data, deserialize_contexts, serialize_contexts, DeserializeError, Format,
    SerializeError,
};

/// Errors from the save/load round trip.
#[derive(Debug)]
pub enum PersistError {
    /// The asset source failed to provide or store the document text.
    Asset(AssetError),
    /// The document did not decode or apply.
    Decode(DeserializeError),
    /// The registry did not encode.
    Encode(SerializeError),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset(err) => write!(f, "asset error: {err}"),
            Self::Decode(err) => write!(f, "load error: {err}"),
            Self::Encode(err) => write!(f, "save error: {err}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asset(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<AssetError> for PersistError {
    fn from(err: AssetError) -> Self {
        Self::Asset(err)
    }
}

impl From<DeserializeError> for PersistError {
    fn from(err: DeserializeError) -> Self {
        Self::Decode(err)
    }
}

impl From<SerializeError> for PersistError {
    fn from(err: SerializeError) -> Self {
        Self::Encode(err)
    }
}

/// Loads the saved document at `key` and creates the entities it
/// describes. Returns how many were created.
///
/// A failure at any step (asset, parse, apply) leaves the registry
/// untouched.
pub async fn load_entities(
    registry: &mut ContextRegistry,
    assets: &AssetRouter,
    key: &str,
) -> Result<usize, PersistError> {
    let text = assets.read_text(key).await?;
    let records = deserialize_contexts(&text)?;
    let created = apply_context_data(registry, &records)?;
    log::debug!("loaded {created} entities from {key:?}");
    Ok(created)
}

/// Snapshots the registry and writes the encoded document to `key`.
pub async fn save_entities(
    registry: &ContextRegistry,
    assets: &AssetRouter,
    key: &str,
    format: Format,
) -> Result<(), PersistError> {
    let text = serialize_contexts(registry, format)?;
    assets.write(key, text.into_bytes()).await?;
    log::debug!("saved {} contexts to {key:?}", registry.len());
    Ok(())
}
