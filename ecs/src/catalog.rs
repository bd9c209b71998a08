//! Per-context component kind catalogs.
//!
//! A catalog is the declared list of component kinds one context
//! accepts, populated explicitly at startup. Each kind is addressable by
//! **kind index** (its position in the catalog, the unit archetypes are
//! computed over), by name, and by `TypeId`, and carries a type-erased
//! function table for default construction, column creation, and JSON
//! encode/decode.

use std::any::TypeId;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::component::{AnyComponent, BoxedComponent, Component};
use crate::storage::{AnyColumn, SparseColumn, TypedColumn};

/// One registered component kind.
pub struct ComponentKind {
    name: &'static str,
    type_id: TypeId,
    serializable: bool,
    new_default: fn() -> BoxedComponent,
    new_column: fn() -> Box<dyn AnyColumn>,
    encode: Option<fn(&dyn AnyComponent) -> Result<serde_json::Value, serde_json::Error>>,
    decode: Option<fn(serde_json::Value) -> Result<BoxedComponent, serde_json::Error>>,
}

impl ComponentKind {
    /// The kind name ([`Component::NAME`] of the registered type).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The `TypeId` of the registered type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether values of this kind appear in saved documents.
    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    /// Builds a default-constructed instance of this kind.
    pub fn new_default(&self) -> BoxedComponent {
        (self.new_default)()
    }

    /// Builds an empty storage column for this kind.
    pub(crate) fn new_column(&self) -> Box<dyn AnyColumn> {
        (self.new_column)()
    }

    /// Encodes a value of this kind to JSON.
    ///
    /// `None` for kinds registered without save support. Panics if the
    /// value is not of this kind; the catalog's callers only pass values
    /// read from the kind's own column.
    pub(crate) fn encode(
        &self,
        value: &dyn AnyComponent,
    ) -> Option<Result<serde_json::Value, serde_json::Error>> {
        self.encode.map(|encode| encode(value))
    }

    /// Decodes a JSON payload into a boxed value of this kind.
    ///
    /// `None` for kinds registered without save support.
    pub(crate) fn decode(
        &self,
        data: serde_json::Value,
    ) -> Option<Result<BoxedComponent, serde_json::Error>> {
        self.decode.map(|decode| decode(data))
    }
}

/// Ordered collection of the component kinds one context accepts.
///
/// Registration is idempotent per type: registering the same type twice
/// returns the original kind index. Indices are assigned in registration
/// order and never change.
#[derive(Default)]
pub struct ComponentCatalog {
    kinds: Vec<ComponentKind>,
    by_name: HashMap<&'static str, usize>,
    by_type: HashMap<TypeId, usize>,
}

impl ComponentCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component kind without save support, returning its
    /// kind index.
    ///
    /// # Panics
    ///
    /// Panics if a different type is already registered under the same
    /// [`Component::NAME`].
    pub fn register<T: Component + Default + Clone>(&mut self) -> usize {
        self.insert_kind::<T>(None, None)
    }

    /// Registers a component kind whose values appear in saved
    /// documents, returning its kind index.
    ///
    /// # Panics
    ///
    /// Panics if a different type is already registered under the same
    /// [`Component::NAME`].
    pub fn register_serializable<T>(&mut self) -> usize
    where
        T: Component + Default + Clone + Serialize + DeserializeOwned,
    {
        self.insert_kind::<T>(Some(encode_erased::<T>), Some(decode_erased::<T>))
    }

    fn insert_kind<T: Component + Default + Clone>(
        &mut self,
        encode: Option<fn(&dyn AnyComponent) -> Result<serde_json::Value, serde_json::Error>>,
        decode: Option<fn(serde_json::Value) -> Result<BoxedComponent, serde_json::Error>>,
    ) -> usize {
        let type_id = TypeId::of::<T>();
        if let Some(&index) = self.by_type.get(&type_id) {
            return index;
        }
        if self.by_name.contains_key(T::NAME) {
            panic!(
                "component kind name {:?} is already registered by a different type",
                T::NAME
            );
        }

        let index = self.kinds.len();
        self.kinds.push(ComponentKind {
            name: T::NAME,
            type_id,
            serializable: encode.is_some(),
            new_default: new_default_erased::<T>,
            new_column: new_column_erased::<T>,
            encode,
            decode,
        });
        self.by_name.insert(T::NAME, index);
        self.by_type.insert(type_id, index);
        index
    }

    /// Returns the kind at the given index.
    pub fn kind(&self, index: usize) -> Option<&ComponentKind> {
        self.kinds.get(index)
    }

    /// Returns the kind index of a registered type.
    pub fn index_of<T: Component>(&self) -> Option<usize> {
        self.by_type.get(&TypeId::of::<T>()).copied()
    }

    /// Returns the kind index registered under `name`.
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns whether no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterates over kinds in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentKind> {
        self.kinds.iter()
    }
}

fn new_default_erased<T: Component + Default + Clone>() -> BoxedComponent {
    Box::new(T::default())
}

fn new_column_erased<T: Component + Clone>() -> Box<dyn AnyColumn> {
    Box::new(TypedColumn(SparseColumn::<T>::new()))
}

fn encode_erased<T: Component + Serialize>(
    value: &dyn AnyComponent,
) -> Result<serde_json::Value, serde_json::Error> {
    let value = value
        .as_any()
        .downcast_ref::<T>()
        .expect("component value does not match its registered kind");
    serde_json::to_value(value)
}

fn decode_erased<T: Component + DeserializeOwned + Clone>(
    data: serde_json::Value,
) -> Result<BoxedComponent, serde_json::Error> {
    let value: T = serde_json::from_value(data)?;
    Ok(Box::new(value))
}
