//! Sparse component columns.
//!
//! Each registered kind owns one column. A column maps entity slot
//! indices to densely packed values through a sparse index array, for
//! O(1) insert/remove/get. Columns are accessed type-erased through
//! [`AnyColumn`] and downcast to their typed form where concrete access
//! is needed.

use std::any::Any;

use crate::component::{AnyComponent, Component};

/// Typed sparse storage for components of type T.
pub(crate) struct SparseColumn<T> {
    /// Sparse array: `entity_index -> dense_index`. `None` means the
    /// entity does not have this component.
    sparse: Vec<Option<u32>>,
    /// Dense array of component values.
    dense: Vec<T>,
    /// Entity indices corresponding to each dense element.
    entities: Vec<u32>,
}

impl<T> SparseColumn<T> {
    /// Creates a new empty column.
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Inserts a component for the given entity index.
    /// If the entity already has this component, the value is replaced.
    pub fn insert(&mut self, entity_index: u32, value: T) {
        let idx = entity_index as usize;

        if idx >= self.sparse.len() {
            self.sparse.resize(idx + 1, None);
        }

        if let Some(dense_idx) = self.sparse[idx] {
            self.dense[dense_idx as usize] = value;
        } else {
            let dense_idx = self.dense.len() as u32;
            self.sparse[idx] = Some(dense_idx);
            self.dense.push(value);
            self.entities.push(entity_index);
        }
    }

    /// Removes a component for the given entity index.
    /// Returns the removed value, or `None` if the entity did not have it.
    pub fn remove(&mut self, entity_index: u32) -> Option<T> {
        let idx = entity_index as usize;
        if idx >= self.sparse.len() {
            return None;
        }

        let dense_idx = self.sparse[idx]? as usize;
        self.sparse[idx] = None;

        let last_dense = self.dense.len() - 1;
        if dense_idx != last_dense {
            // Swap-remove: move the last element into the removed slot
            let swapped_entity = self.entities[last_dense];
            self.sparse[swapped_entity as usize] = Some(dense_idx as u32);
            self.entities[dense_idx] = swapped_entity;
        }

        self.entities.pop();
        Some(self.dense.swap_remove(dense_idx))
    }

    /// Returns a reference to the component for the given entity index.
    pub fn get(&self, entity_index: u32) -> Option<&T> {
        let dense_idx = (*self.sparse.get(entity_index as usize)?)? as usize;
        Some(&self.dense[dense_idx])
    }

    /// Returns a mutable reference to the component for the given entity index.
    pub fn get_mut(&mut self, entity_index: u32) -> Option<&mut T> {
        let dense_idx = (*self.sparse.get(entity_index as usize)?)? as usize;
        Some(&mut self.dense[dense_idx])
    }

    /// Returns whether the entity has this component.
    pub fn contains(&self, entity_index: u32) -> bool {
        let idx = entity_index as usize;
        idx < self.sparse.len() && self.sparse[idx].is_some()
    }

    /// Returns the number of components stored.
    pub fn len(&self) -> usize {
        self.dense.len()
    }
}

impl<T> Default for SparseColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased storage column, one per registered kind.
///
/// Everything the crate needs from a column without knowing its
/// component type: boxed insertion (deserialized payloads), removal,
/// presence checks, and erased borrowing for snapshots.
pub(crate) trait AnyColumn: Send + Sync {
    /// Inserts a boxed component value for the given entity index.
    ///
    /// Panics if the boxed value is not the column's component type;
    /// callers route values through the catalog, which guarantees the
    /// match.
    fn insert_boxed(&mut self, entity_index: u32, value: Box<dyn Any>);

    /// Removes the value for the given entity index. Returns whether a
    /// value was present.
    fn remove(&mut self, entity_index: u32) -> bool;

    /// Returns whether the entity has a value in this column.
    fn contains(&self, entity_index: u32) -> bool;

    /// Borrows the value for the given entity index, erased.
    fn get_erased(&self, entity_index: u32) -> Option<&dyn AnyComponent>;

    /// Returns the number of values stored.
    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete [`AnyColumn`] for a specific component type.
pub(crate) struct TypedColumn<T>(pub SparseColumn<T>);

impl<T: Component + Clone> AnyColumn for TypedColumn<T> {
    fn insert_boxed(&mut self, entity_index: u32, value: Box<dyn Any>) {
        let value = value
            .downcast::<T>()
            .expect("boxed component does not match its column type");
        self.0.insert(entity_index, *value);
    }

    fn remove(&mut self, entity_index: u32) -> bool {
        self.0.remove(entity_index).is_some()
    }

    fn contains(&self, entity_index: u32) -> bool {
        self.0.contains(entity_index)
    }

    fn get_erased(&self, entity_index: u32) -> Option<&dyn AnyComponent> {
        self.0.get(entity_index).map(|value| value as &dyn AnyComponent)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
