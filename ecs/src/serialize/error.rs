//! Error types for snapshotting, loading, and validating saved documents.

use std::fmt;

/// Errors that can occur while snapshotting contexts.
#[derive(Debug)]
pub enum SerializeError {
    /// A component value could not be encoded to JSON.
    Component {
        context: String,
        kind: &'static str,
        message: String,
    },
    /// Document-level JSON encoding error.
    FormatError(String),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component {
                context,
                kind,
                message,
            } => {
                write!(
                    f,
                    "failed to encode component '{kind}' in context '{context}': {message}"
                )
            }
            Self::FormatError(msg) => write!(f, "format error: {msg}"),
        }
    }
}

impl std::error::Error for SerializeError {}

/// Errors that can occur while loading a saved document.
#[derive(Debug)]
pub enum DeserializeError {
    /// The document or a component payload did not parse.
    Malformed(String),
    /// A record names a context that is not registered.
    UnknownContext { context: String },
    /// A component discriminant is not in the named context's catalog.
    UnknownComponentKind { context: String, kind: String },
    /// The kind is registered but carries no save support.
    NotSerializable { context: String, kind: String },
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed document: {msg}"),
            Self::UnknownContext { context } => {
                write!(f, "unknown context '{context}'")
            }
            Self::UnknownComponentKind { context, kind } => {
                write!(
                    f,
                    "unknown component kind '{kind}' in context '{context}'"
                )
            }
            Self::NotSerializable { context, kind } => {
                write!(
                    f,
                    "component kind '{kind}' in context '{context}' does not support loading"
                )
            }
        }
    }
}

impl std::error::Error for DeserializeError {}

/// Authoring-rule violations in saved records.
#[derive(Debug)]
pub enum ValidationError {
    /// An entity record lists the same component kind more than once.
    DuplicateKind {
        context: String,
        entity: usize,
        kind: String,
    },
    /// An entity record contains a blank kind discriminant.
    EmptyKind { context: String, entity: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKind {
                context,
                entity,
                kind,
            } => {
                write!(
                    f,
                    "entity {entity} in context '{context}' lists component kind '{kind}' more than once"
                )
            }
            Self::EmptyKind { context, entity } => {
                write!(
                    f,
                    "entity {entity} in context '{context}' has a blank component kind"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
