use std::future::Future;
use std::pin::Pin;

use crate::error::AssetError;

/// Boxed future returned by asset source operations.
pub type AssetFuture<T> = Pin<Box<dyn Future<Output = Result<T, AssetError>> + Send>>;

/// A backend that can serve asset bytes by key.
///
/// Keys passed to a source are already normalized and relative to the
/// source's own root. Implementations decide how the bytes are produced,
/// so a source may be backed by memory, a directory, or anything else
/// that can complete the returned future.
pub trait AssetSource: Send + Sync + 'static {
    /// Reads the full contents of the asset at `key`.
    fn read(&self, key: &str) -> AssetFuture<Vec<u8>>;

    /// Checks whether an asset exists at `key`.
    fn exists(&self, key: &str) -> AssetFuture<bool>;

    /// Whether this source rejects writes.
    fn is_read_only(&self) -> bool {
        true
    }

    /// Writes `data` to the asset at `key`, replacing any existing contents.
    fn write(&self, _key: &str, _data: Vec<u8>) -> AssetFuture<()> {
        Box::pin(async { Err(AssetError::ReadOnly) })
    }
}
