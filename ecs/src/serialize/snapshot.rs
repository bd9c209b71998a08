//! Snapshotting live contexts into saved records.

use crate::context::Context;
use crate::registry::ContextRegistry;

use super::data::{ComponentData, ContextData};
use super::error::SerializeError;
use super::format::{encode, Format};

/// Captures one context's persistable entities as a saved record.
///
/// Entities appear in ascending index order; within each entity record,
/// components appear in catalog order. Only serializable kinds are
/// captured, and entities whose record would be empty are dropped from
/// the output entirely (there is nothing to restore for them).
pub fn snapshot_context(context: &Context) -> Result<ContextData, SerializeError> {
    let mut entities = Vec::new();

    for entity in context.iter_entities() {
        let mut record = Vec::new();
        for (index, kind) in context.catalog().iter().enumerate() {
            let Some(value) = context.component_erased(entity, index) else {
                continue;
            };
            let data = match kind.encode(value) {
                Some(Ok(data)) => data,
                Some(Err(err)) => {
                    return Err(SerializeError::Component {
                        context: context.name().to_string(),
                        kind: kind.name(),
                        message: err.to_string(),
                    });
                }
                // Kind carries no save support; skip the value
                None => continue,
            };
            record.push(ComponentData {
                kind: kind.name().to_string(),
                data,
            });
        }
        if !record.is_empty() {
            entities.push(record);
        }
    }

    Ok(ContextData {
        context: context.name().to_string(),
        entities,
    })
}

/// Captures every context in the registry, in name order.
///
/// Contexts holding no persistable entities still produce a record with
/// an empty entity list.
pub fn snapshot_registry(registry: &ContextRegistry) -> Result<Vec<ContextData>, SerializeError> {
    registry.iter().map(snapshot_context).collect()
}

/// Snapshots the registry and encodes the document as JSON text.
pub fn serialize_contexts(
    registry: &ContextRegistry,
    format: Format,
) -> Result<String, SerializeError> {
    let records = snapshot_registry(registry)?;
    encode(&records, format)
}

/// Encodes hand-assembled records as JSON text without touching live
/// contexts.
pub fn serialize_context_data(
    records: &[ContextData],
    format: Format,
) -> Result<String, SerializeError> {
    encode(&records, format)
}
