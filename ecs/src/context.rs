//! Named entity containers.
//!
//! A [`Context`] owns an entity allocator, a component catalog, and one
//! storage column per registered kind. Different contexts partition a
//! program's entities (e.g. `"game"` vs `"input"`); each is fully
//! independent.
//!
//! Contexts are single-writer: all mutation goes through `&mut self` and
//! there is no interior locking. Share one across threads by whatever
//! exclusion the caller already has.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::bundle::Bundle;
use crate::catalog::ComponentCatalog;
use crate::component::{AnyComponent, BoxedComponent, Component};
use crate::entity::{Entity, EntityAllocator};
use crate::storage::{AnyColumn, SparseColumn, TypedColumn};

/// Errors from entity and component operations on a context.
#[derive(Debug)]
pub enum ContextError {
    /// The component kind is not in this context's catalog.
    KindNotRegistered { context: String, kind: String },
    /// The entity has been destroyed (or never existed here).
    DeadEntity { context: String, entity: Entity },
    /// A kind index is outside the catalog.
    InvalidKindIndex { context: String, index: usize },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindNotRegistered { context, kind } => {
                write!(
                    f,
                    "component kind '{kind}' is not registered in context '{context}'"
                )
            }
            Self::DeadEntity { context, entity } => {
                write!(f, "{entity} is not alive in context '{context}'")
            }
            Self::InvalidKindIndex { context, index } => {
                write!(f, "kind index {index} is out of range for context '{context}'")
            }
        }
    }
}

impl std::error::Error for ContextError {}

/// A named container of entities and their components.
///
/// Register every component kind during startup, before creating
/// entities:
///
/// ```ignore
/// let mut game = Context::new("game");
/// game.register_serializable::<Position>();
/// game.register::<Selection>();
/// let player = game.create_entity_with((Position { x: 0.0, y: 0.0 },))?;
/// ```
pub struct Context {
    name: String,
    allocator: EntityAllocator,
    catalog: ComponentCatalog,
    /// One column per catalog kind, in kind-index order.
    columns: Vec<Box<dyn AnyColumn>>,
}

impl Context {
    /// Creates an empty context with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allocator: EntityAllocator::new(),
            catalog: ComponentCatalog::new(),
            columns: Vec::new(),
        }
    }

    /// The context name, the key the registry and saved documents use.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The context's component catalog.
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Registers a component kind without save support, returning its
    /// kind index. Idempotent per type.
    pub fn register<T: Component + Default + Clone>(&mut self) -> usize {
        let index = self.catalog.register::<T>();
        self.ensure_columns();
        index
    }

    /// Registers a component kind whose values appear in saved
    /// documents, returning its kind index. Idempotent per type.
    pub fn register_serializable<T>(&mut self) -> usize
    where
        T: Component + Default + Clone + Serialize + DeserializeOwned,
    {
        let index = self.catalog.register_serializable::<T>();
        self.ensure_columns();
        index
    }

    fn ensure_columns(&mut self) {
        for index in self.columns.len()..self.catalog.len() {
            if let Some(kind) = self.catalog.kind(index) {
                self.columns.push(kind.new_column());
            }
        }
    }

    // ---- Entity operations ----

    /// Creates a new empty entity.
    pub fn create_entity(&mut self) -> Entity {
        self.allocator.allocate()
    }

    /// Creates `count` empty entities at once.
    pub fn create_entities(&mut self, count: u32) -> Vec<Entity> {
        self.allocator.allocate_many(count)
    }

    /// Creates an entity carrying every component of `bundle`.
    ///
    /// On error (a bundle element's kind is not registered) no entity is
    /// left behind.
    pub fn create_entity_with<B: Bundle>(&mut self, bundle: B) -> Result<Entity, ContextError> {
        let entity = self.allocator.allocate();
        if let Err(err) = bundle.insert_into(self, entity) {
            self.destroy_entity(entity);
            return Err(err);
        }
        Ok(entity)
    }

    /// Creates an entity from type-erased component values.
    ///
    /// This is the path deserialized payloads arrive through. On error
    /// no entity is left behind.
    pub fn create_entity_from(
        &mut self,
        parts: Vec<BoxedComponent>,
    ) -> Result<Entity, ContextError> {
        let entity = self.allocator.allocate();
        for part in parts {
            if let Err(err) = self.attach_boxed(entity, part) {
                self.destroy_entity(entity);
                return Err(err);
            }
        }
        Ok(entity)
    }

    /// Creates an entity carrying a default instance of each listed
    /// kind index.
    pub fn create_entity_by_kinds(&mut self, kind_indexes: &[usize]) -> Result<Entity, ContextError> {
        for &index in kind_indexes {
            if self.catalog.kind(index).is_none() {
                return Err(ContextError::InvalidKindIndex {
                    context: self.name.clone(),
                    index,
                });
            }
        }

        let entity = self.allocator.allocate();
        for &index in kind_indexes {
            if let Some(kind) = self.catalog.kind(index) {
                let value = kind.new_default();
                self.columns[index].insert_boxed(entity.index(), value.into_any());
            }
        }
        Ok(entity)
    }

    /// Destroys an entity, removing all its components. Returns false if
    /// it was already dead. The slot index is never reused.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.allocator.deallocate(entity) {
            return false;
        }
        for column in &mut self.columns {
            column.remove(entity.index());
        }
        true
    }

    /// All alive entities in ascending index order.
    pub fn entities(&self) -> Vec<Entity> {
        self.allocator.iter_alive().collect()
    }

    /// Iterates over alive entities in ascending index order.
    pub fn iter_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.allocator.iter_alive()
    }

    /// The number of alive entities.
    pub fn entity_count(&self) -> u32 {
        self.allocator.count()
    }

    /// Returns whether the entity is alive in this context.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    // ---- Component operations ----

    /// Attaches a component to an entity. If the entity already has a
    /// value of this kind, it is replaced.
    pub fn attach<T: Component>(&mut self, entity: Entity, value: T) -> Result<(), ContextError> {
        let Some(index) = self.catalog.index_of::<T>() else {
            return Err(ContextError::KindNotRegistered {
                context: self.name.clone(),
                kind: T::NAME.to_string(),
            });
        };
        if !self.allocator.is_alive(entity) {
            return Err(ContextError::DeadEntity {
                context: self.name.clone(),
                entity,
            });
        }
        self.typed_column_mut::<T>(index).insert(entity.index(), value);
        Ok(())
    }

    /// Attaches a type-erased component value to an entity, resolving
    /// its kind by name. If the entity already has a value of this kind,
    /// it is replaced.
    pub fn attach_boxed(
        &mut self,
        entity: Entity,
        component: BoxedComponent,
    ) -> Result<(), ContextError> {
        let name = component.component_name();
        let Some(index) = self.catalog.index_of_name(name) else {
            return Err(ContextError::KindNotRegistered {
                context: self.name.clone(),
                kind: name.to_string(),
            });
        };
        if !self.allocator.is_alive(entity) {
            return Err(ContextError::DeadEntity {
                context: self.name.clone(),
                entity,
            });
        }
        self.columns[index].insert_boxed(entity.index(), component.into_any());
        Ok(())
    }

    /// Returns a reference to the entity's component of type T.
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        let index = self.catalog.index_of::<T>()?;
        self.typed_column::<T>(index).get(entity.index())
    }

    /// Returns a mutable reference to the entity's component of type T.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        let index = self.catalog.index_of::<T>()?;
        self.typed_column_mut::<T>(index).get_mut(entity.index())
    }

    /// Returns whether the entity has a component of type T.
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.catalog
            .index_of::<T>()
            .is_some_and(|index| self.columns[index].contains(entity.index()))
    }

    /// Returns whether the entity has a component of the given kind index.
    pub fn has_kind(&self, entity: Entity, index: usize) -> bool {
        self.columns
            .get(index)
            .is_some_and(|column| column.contains(entity.index()))
    }

    /// Removes and returns the entity's component of type T.
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let index = self.catalog.index_of::<T>()?;
        self.typed_column_mut::<T>(index).remove(entity.index())
    }

    /// Clones of every component on the entity, in catalog order.
    pub fn components_of(&self, entity: Entity) -> Vec<BoxedComponent> {
        self.columns
            .iter()
            .filter_map(|column| column.get_erased(entity.index()))
            .map(|value| value.clone_box())
            .collect()
    }

    /// The entity's kind indices in ascending order.
    pub fn component_indexes(&self, entity: Entity) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.contains(entity.index()))
            .map(|(index, _)| index)
            .collect()
    }

    /// Borrows the entity's component at the given kind index, erased.
    pub(crate) fn component_erased(
        &self,
        entity: Entity,
        index: usize,
    ) -> Option<&dyn AnyComponent> {
        self.columns.get(index)?.get_erased(entity.index())
    }

    fn typed_column<T: Component>(&self, index: usize) -> &SparseColumn<T> {
        &self.columns[index]
            .as_any()
            .downcast_ref::<TypedColumn<T>>()
            .expect("storage column does not match its registered kind")
            .0
    }

    fn typed_column_mut<T: Component>(&mut self, index: usize) -> &mut SparseColumn<T> {
        &mut self.columns[index]
            .as_any_mut()
            .downcast_mut::<TypedColumn<T>>()
            .expect("storage column does not match its registered kind")
            .0
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("name", &self.name)
            .field("entities", &self.allocator.count())
            .field("kinds", &self.catalog.len())
            .finish()
    }
}
