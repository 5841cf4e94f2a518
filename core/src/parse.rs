//! Editor text → validated, typed schema.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::validate::{SchemaWarning, validate_document};
use crate::FormSchema;

/// A schema that passed validation, with any non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSchema {
    pub schema: FormSchema,
    pub warnings: Vec<SchemaWarning>,
}

impl FormSchema {
    /// Converts an already validated document into the typed model.
    ///
    /// Scalar properties are coerced rather than rejected, so every document
    /// that passes [`validate_document`] converts.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Shape`] when the document is not an object or
    /// `fields` is not an array of objects. Validation rejects both first.
    pub fn from_value(doc: &Value) -> Result<Self> {
        FormSchema::deserialize(doc).map_err(SchemaError::Shape)
    }
}

/// Parses, validates and converts editor text in one step.
///
/// A schema with any validation issue is rejected as a whole.
///
/// # Examples
///
/// ```
/// use form_schema_core::{SchemaError, parse_schema};
///
/// let parsed = parse_schema(r#"{"formTitle": "T", "fields": []}"#).unwrap();
/// assert_eq!(parsed.schema.form_title, "T");
///
/// let err = parse_schema("{ not json").unwrap_err();
/// assert_eq!(err.messages(), vec!["Invalid JSON format"]);
///
/// let err = parse_schema(r#"{"fields": []}"#).unwrap_err();
/// assert!(matches!(err, SchemaError::Invalid(_)));
/// ```
pub fn parse_schema(text: &str) -> Result<ParsedSchema> {
    let doc: Value = serde_json::from_str(text).map_err(SchemaError::InvalidJson)?;
    let validation = validate_document(&doc);
    if !validation.is_valid() {
        return Err(SchemaError::Invalid(validation.errors()));
    }

    let schema = FormSchema::from_value(&doc)?;
    Ok(ParsedSchema {
        schema,
        warnings: validation.warnings,
    })
}
