//! Named context registry.
//!
//! The registry is the explicit replacement for global context
//! discovery: build it once at startup, register every context the
//! program uses, then pass it by reference to whatever saves, loads, or
//! queries across contexts. An empty registry is valid; resolving any
//! name against it simply fails with an unknown-context error at the
//! call site.
//!
//! Contexts are keyed in a `BTreeMap`, so iteration (and everything
//! derived from it, like multi-context snapshots) is ordered by name.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::context::Context;

/// Holds every named [`Context`] a program works with.
#[derive(Default)]
pub struct ContextRegistry {
    contexts: BTreeMap<String, Context>,
}

impl ContextRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a context under its own name, returning a reference for
    /// further setup. Re-registering a name replaces the previous
    /// context and logs a warning.
    pub fn register(&mut self, context: Context) -> &mut Context {
        match self.contexts.entry(context.name().to_string()) {
            Entry::Occupied(mut slot) => {
                log::warn!("replacing context registered under {:?}", slot.key());
                slot.insert(context);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(context),
        }
    }

    /// Returns the context registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Returns the context registered under `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.get_mut(name)
    }

    /// Returns whether a context is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }

    /// Registered context names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Iterates over contexts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        self.contexts.values()
    }

    /// Iterates over contexts in name order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Context> {
        self.contexts.values_mut()
    }

    /// The number of registered contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns whether no contexts are registered.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_resolve_by_name() {
        let mut registry = ContextRegistry::new();
        registry.register(Context::new("game"));
        registry.register(Context::new("input"));

        assert!(registry.contains("game"));
        assert!(registry.get("input").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ContextRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("game").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ContextRegistry::new();
        registry.register(Context::new("zulu"));
        registry.register(Context::new("alpha"));
        registry.register(Context::new("mike"));

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn reregistering_replaces_the_context() {
        let mut registry = ContextRegistry::new();
        {
            let game = registry.register(Context::new("game"));
            game.create_entity();
            game.create_entity();
        }
        assert_eq!(registry.get("game").unwrap().entity_count(), 2);

        registry.register(Context::new("game"));
        assert_eq!(registry.get("game").unwrap().entity_count(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_returns_usable_reference() {
        let mut registry = ContextRegistry::new();
        let entity = registry.register(Context::new("game")).create_entity();
        assert!(registry.get("game").unwrap().is_alive(entity));
    }
}
