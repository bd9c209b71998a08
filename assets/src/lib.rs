//! Asynchronous asset access for Firethorn.
//!
//! Provides a unified API for reading and writing assets from multiple
//! storage backends through the [`AssetSource`] trait and the
//! [`AssetRouter`].
//!
//! All operations return boxed futures (`Pin<Box<dyn Future + Send>>`).
//! The bundled sources complete on the first poll, so synchronous
//! callers can drive them with [`poll_now`]; sources that do real
//! background IO need an async executor.
//!
//! # Sources
//!
//! - [`MemoryAssets`] — In-memory storage for tests and generated
//!   content (read-write)
//! - [`DirAssets`] — A directory on the local filesystem (read-write,
//!   native only)
//!
//! Custom backends implement [`AssetSource`]. Read operations are
//! mandatory; writes default to [`AssetError::ReadOnly`].

mod error;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
mod filesystem;
pub mod key;
mod memory;
mod poll;
mod router;
mod source;

pub use error::AssetError;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
pub use filesystem::DirAssets;
pub use memory::MemoryAssets;
pub use poll::poll_now;
pub use router::AssetRouter;
pub use source::{AssetFuture, AssetSource};
