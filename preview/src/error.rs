//! Error types for building and driving form previews.

use thiserror::Error;

/// Errors that can occur while compiling or operating a form.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// A field's `validation.pattern` is not a valid regular expression.
    #[error("Invalid pattern for field {field_id}: {source}")]
    InvalidPattern {
        field_id: String,
        #[source]
        source: regex::Error,
    },

    /// A value was supplied for a field the form does not render.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`PreviewError`].
pub type Result<T> = std::result::Result<T, PreviewError>;
