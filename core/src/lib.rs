//! Core form schema types, structural validation and the starter schema.
//!
//! This crate defines the data model behind a JSON-driven form preview:
//!
//! - [`FormSchema`] — title, optional description and an ordered field list.
//! - [`Field`] — one input with a [`FieldType`], label, optional
//!   [`FormOption`]s and an optional [`ValidationRule`].
//! - [`FormValues`] — submitted [`FieldValue`]s keyed by field id.
//!
//! Validation ([`validate_document`]) runs on the raw parsed JSON and
//! reports human-readable [`SchemaIssue`]s plus non-fatal
//! [`SchemaWarning`]s. [`parse_schema`] chains JSON parsing, validation and
//! typed conversion the way an editor host does on every keystroke.
//!
//! # Example
//!
//! ```
//! use form_schema_core::*;
//!
//! let text = default_schema_text(DEFAULT_INDENT);
//! let parsed = parse_schema(&text).unwrap();
//! assert_eq!(parsed.schema, generate_default_schema());
//!
//! let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
//! assert!(validate_document(&doc).is_valid());
//! ```

mod coerce;
mod default_schema;
mod error;
mod parse;
mod types;
mod validate;

pub use default_schema::{
    DEFAULT_INDENT, default_schema_text, generate_default_schema, to_pretty_json,
};
pub use error::{INVALID_JSON_MESSAGE, Result, SchemaError};
pub use parse::{ParsedSchema, parse_schema};
pub use types::*;
pub use validate::{SchemaIssue, SchemaValidation, SchemaWarning, validate_document};
