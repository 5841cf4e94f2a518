//! Error types for turning editor text into a typed schema.

use thiserror::Error;

/// Message shown when the editor text is not JSON at all.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";

/// Reasons a piece of editor text cannot be used as a form schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The text is not valid JSON.
    #[error("Invalid JSON format")]
    InvalidJson(#[source] serde_json::Error),

    /// The document failed structural validation.
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The document cannot be converted to the typed model at all (it is
    /// not an object, or `fields` holds non-objects).
    #[error("Schema does not match the form model: {0}")]
    Shape(#[source] serde_json::Error),
}

impl SchemaError {
    /// Messages to show in the editor's error list.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;
