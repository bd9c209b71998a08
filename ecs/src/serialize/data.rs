//! Saved document data structures.
//!
//! A saved document is a JSON array of [`ContextData`] records, one per
//! context. Components are stored in tagged form: the `kind`
//! discriminant names a catalog entry of the owning context and `data`
//! carries the serde-encoded fields, so a document can be decoded
//! without any global type information:
//!
//! ```json
//! [
//!   {
//!     "context": "game",
//!     "entities": [
//!       [ { "kind": "Position", "data": { "x": 1.0, "y": 2.0 } } ]
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// One context's saved entities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextData {
    /// The context name records resolve against on load.
    pub context: String,
    /// One record per entity; each record lists the entity's persisted
    /// components.
    pub entities: Vec<Vec<ComponentData>>,
}

/// A single component's tagged payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentData {
    /// The kind discriminant (matches [`Component::NAME`](crate::Component::NAME)).
    pub kind: String,
    /// The serde-encoded field data.
    pub data: serde_json::Value,
}

impl ContextData {
    /// Checks authoring rules over this record.
    ///
    /// Loading does not call this; it exists for editors and pipelines
    /// that assemble records by hand. Flags entity records listing the
    /// same kind more than once (an entity holds at most one value per
    /// kind) and blank kind discriminants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (entity, record) in self.entities.iter().enumerate() {
            let mut seen = HashSet::new();
            for component in record {
                if component.kind.trim().is_empty() {
                    return Err(ValidationError::EmptyKind {
                        context: self.context.clone(),
                        entity,
                    });
                }
                if !seen.insert(component.kind.as_str()) {
                    return Err(ValidationError::DuplicateKind {
                        context: self.context.clone(),
                        entity,
                        kind: component.kind.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Validates every record of a document.
pub fn validate_all(records: &[ContextData]) -> Result<(), ValidationError> {
    for record in records {
        record.validate()?;
    }
    Ok(())
}
