//! Saving and loading context entities as JSON documents.
//!
//! This module provides:
//!
//! - [`ContextData`] / [`ComponentData`] — the saved document data model
//!   with tagged component payloads
//! - [`Format`] / [`encode`] / [`decode`] — document-level JSON text I/O
//! - [`snapshot_context`] / [`snapshot_registry`] / [`serialize_contexts`]
//!   — capturing live contexts into records
//! - [`deserialize_contexts`] / [`apply_context_data`] — recreating
//!   entities from records, all-or-nothing
//! - [`validate_all`] — authoring-time checks over assembled records
//!
//! Only kinds registered with
//! [`register_serializable`](crate::Context::register_serializable) take
//! part; everything else on an entity is treated as transient and
//! skipped when snapshotting.

mod apply;
mod data;
mod error;
mod format;
mod snapshot;

pub use apply::{apply_context_data, deserialize_contexts};
pub use data::{validate_all, ComponentData, ContextData};
pub use error::{DeserializeError, SerializeError, ValidationError};
pub use format::{decode, encode, Format};
pub use snapshot::{
    serialize_context_data, serialize_contexts, snapshot_context, snapshot_registry,
};
