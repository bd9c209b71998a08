//! Applying saved records to live contexts.

use crate::component::BoxedComponent;
use crate::registry::ContextRegistry;

use super::data::ContextData;
use super::error::DeserializeError;
use super::format::decode;

/// Parses a saved document into context records.
pub fn deserialize_contexts(text: &str) -> Result<Vec<ContextData>, DeserializeError> {
    decode(text)
}

/// Creates the entities a document describes. Returns how many were
/// created.
///
/// Application is all-or-nothing: every record's context name is
/// resolved and every component payload decoded against that context's
/// catalog *before* any entity is created, so a document that fails
/// anywhere leaves the whole registry untouched.
pub fn apply_context_data(
    registry: &mut ContextRegistry,
    records: &[ContextData],
) -> Result<usize, DeserializeError> {
    // Plan: decode everything against the live catalogs.
    let mut planned: Vec<(String, Vec<Vec<BoxedComponent>>)> = Vec::with_capacity(records.len());
    for record in records {
        let Some(context) = registry.get(&record.context) else {
            return Err(DeserializeError::UnknownContext {
                context: record.context.clone(),
            });
        };

        let mut entities = Vec::with_capacity(record.entities.len());
        for entity_record in &record.entities {
            let mut parts = Vec::with_capacity(entity_record.len());
            for component in entity_record {
                let Some(index) = context.catalog().index_of_name(&component.kind) else {
                    return Err(DeserializeError::UnknownComponentKind {
                        context: record.context.clone(),
                        kind: component.kind.clone(),
                    });
                };
                let Some(kind) = context.catalog().kind(index) else {
                    return Err(DeserializeError::UnknownComponentKind {
                        context: record.context.clone(),
                        kind: component.kind.clone(),
                    });
                };
                let decoded = match kind.decode(component.data.clone()) {
                    Some(Ok(value)) => value,
                    Some(Err(err)) => {
                        return Err(DeserializeError::Malformed(format!(
                            "component '{}' in context '{}': {err}",
                            component.kind, record.context
                        )));
                    }
                    None => {
                        return Err(DeserializeError::NotSerializable {
                            context: record.context.clone(),
                            kind: component.kind.clone(),
                        });
                    }
                };
                parts.push(decoded);
            }
            entities.push(parts);
        }
        planned.push((record.context.clone(), entities));
    }

    // Apply: the whole document planned cleanly, build the entities.
    let mut created = 0usize;
    for (name, entities) in planned {
        let context = registry
            .get_mut(&name)
            .expect("planned context disappeared from the registry");
        for parts in entities {
            let entity = context.create_entity();
            for part in parts {
                context
                    .attach_boxed(entity, part)
                    .expect("planned component failed to attach");
            }
            created += 1;
        }
    }

    log::debug!(
        "created {created} entities from {} context records",
        records.len()
    );
    Ok(created)
}
