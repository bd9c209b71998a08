//! Distinct component combinations across a context's entities.
//!
//! An archetype is one distinct set of kind indices observed on a
//! context's alive entities, together with a representative array of
//! default-constructed instances of those kinds. Extraction reports
//! every distinct combination present, so two entities with the same
//! kinds contribute one archetype and entities with different kinds
//! contribute one each.

use std::collections::BTreeMap;

use fixedbitset::FixedBitSet;

use crate::component::BoxedComponent;
use crate::context::Context;
use crate::registry::ContextRegistry;

/// One distinct combination of component kinds.
pub struct Archetype {
    /// Kind indices in ascending order.
    kind_indexes: Vec<usize>,
    /// Default-constructed representative per kind, same order.
    components: Vec<BoxedComponent>,
}

impl Archetype {
    /// The kind indices of this combination, ascending.
    pub fn kind_indexes(&self) -> &[usize] {
        &self.kind_indexes
    }

    /// Default-constructed representatives, one per kind index.
    pub fn components(&self) -> &[BoxedComponent] {
        &self.components
    }

    /// Returns whether this is the componentless combination.
    pub fn is_empty(&self) -> bool {
        self.kind_indexes.is_empty()
    }

    /// The number of kinds in this combination.
    pub fn kind_count(&self) -> usize {
        self.kind_indexes.len()
    }
}

impl std::fmt::Debug for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archetype")
            .field("kind_indexes", &self.kind_indexes)
            .finish()
    }
}

/// Extracts every distinct archetype present in a context.
///
/// Each alive entity's kind-index set is collected as a bit mask, the
/// masks are deduplicated, and one representative archetype is built per
/// distinct mask. An entity with no components contributes the empty
/// archetype. Results are sorted by kind indices for stable output.
pub fn context_archetypes(context: &Context) -> Vec<Archetype> {
    let width = context.catalog().len();
    let mut seen: Vec<FixedBitSet> = Vec::new();

    for entity in context.iter_entities() {
        let mut mask = FixedBitSet::with_capacity(width);
        for index in context.component_indexes(entity) {
            mask.insert(index);
        }
        if !seen.contains(&mask) {
            seen.push(mask);
        }
    }

    let mut archetypes: Vec<Archetype> = seen
        .into_iter()
        .map(|mask| {
            let kind_indexes: Vec<usize> = mask.ones().collect();
            let components = kind_indexes
                .iter()
                .filter_map(|&index| context.catalog().kind(index))
                .map(|kind| kind.new_default())
                .collect();
            Archetype {
                kind_indexes,
                components,
            }
        })
        .collect();
    archetypes.sort_by(|a, b| a.kind_indexes.cmp(&b.kind_indexes));
    archetypes
}

/// Extracts archetypes for every context in the registry, keyed by
/// context name.
pub fn registry_archetypes(registry: &ContextRegistry) -> BTreeMap<String, Vec<Archetype>> {
    registry
        .iter()
        .map(|context| (context.name().to_string(), context_archetypes(context)))
        .collect()
}
