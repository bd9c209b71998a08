//! # Firethorn ECS
//!
//! A small multi-context entity/component layer with JSON persistence.
//!
//! ## Core Types
//!
//! - [`Entity`] — Lightweight entity identifier, stable within its context
//! - [`Context`] — Named container owning entities and component columns
//! - [`ComponentCatalog`] — Explicit per-context list of component kinds
//! - [`ContextRegistry`] — All named contexts, built once at startup
//! - [`Archetype`] — One distinct component combination in a context
//!
//! ## Persistence
//!
//! - [`serialize::ContextData`] — Saved document records with tagged
//!   component payloads
//! - [`serialize::serialize_contexts`] / [`serialize::apply_context_data`]
//!   — snapshot and restore
//! - [`load_entities`] / [`save_entities`] — async document I/O through
//!   `firethorn-assets`
//!
//! ## Example
//!
//! ```ignore
//! let mut registry = ContextRegistry::new();
//! let game = registry.register(Context::new("game"));
//! game.register_serializable::<Position>();
//! game.create_entity_with((Position { x: 1.0, y: 2.0 },))?;
//!
//! let json = serialize::serialize_contexts(&registry, serialize::Format::Pretty)?;
//! ```

mod archetype;
mod bundle;
mod catalog;
pub mod component;
mod context;
mod entity;
mod persist;
mod registry;
pub mod serialize;
mod storage;

pub use archetype::{context_archetypes, registry_archetypes, Archetype};
pub use bundle::Bundle;
pub use catalog::{ComponentCatalog, ComponentKind};
pub use component::{AnyComponent, BoxedComponent, Component};
pub use context::{Context, ContextError};
pub use entity::Entity;
pub use firethorn_ecs_macro::Component;
pub use persist::{load_entities, save_entities, PersistError};
pub use registry::ContextRegistry;
