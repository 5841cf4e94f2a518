//! Structural validation of raw schema documents.
//!
//! The validator runs on a parsed [`serde_json::Value`] rather than on a
//! typed [`FormSchema`](crate::FormSchema), because it has to report on
//! documents that do not fit the typed model at all. Presence checks follow
//! JSON truthiness: `null`, `false`, `0` and `""` count as missing.
//!
//! Only the title, the field list, field ids and labels, and option lists
//! are checked. Anything else (an unknown `type`, say) passes and is
//! reported as a [`SchemaWarning`] at most.
//!
//! # Examples
//!
//! ```
//! use form_schema_core::validate_document;
//! use serde_json::json;
//!
//! let result = validate_document(&json!({"fields": "not-a-list"}));
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.errors(),
//!     vec!["Form title is required", "Fields must be an array"],
//! );
//! ```

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::coerce::value_text;

/// A structural problem that makes a schema unusable.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    /// `formTitle` is missing or empty.
    #[error("Form title is required")]
    MissingTitle,
    /// `fields` is missing or not an array. Stops validation.
    #[error("Fields must be an array")]
    FieldsNotArray,
    #[error("Field at index {index} is missing an ID")]
    MissingFieldId { index: usize },
    #[error("Field at index {index} is missing a label")]
    MissingFieldLabel { index: usize },
    /// A select or radio field has no options.
    #[error("{} field {field_id} requires options", .field_type.to_uppercase())]
    MissingOptions { field_type: String, field_id: String },
    /// An option lacks a value or a label.
    #[error("Option {option_index} in field {field_id} is missing value or label")]
    InvalidOption {
        option_index: usize,
        field_id: String,
    },
}

/// A non-fatal observation about a schema. Never affects validity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaWarning {
    /// Two fields share an id; the later one overwrites the earlier one in
    /// submitted values.
    #[error("Field ID {field_id} at index {index} duplicates the field at index {first_index}")]
    DuplicateFieldId {
        field_id: String,
        first_index: usize,
        index: usize,
    },
    /// The field type has no renderer; the field is skipped.
    #[error("Field {field_id} has unsupported type {field_type} and will not be rendered")]
    UnknownFieldType { field_id: String, field_type: String },
}

/// Outcome of [`validate_document`].
///
/// Serializes as `{"valid": bool, "errors": [..]}`, with a `warnings` list
/// added when there are any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaValidation {
    pub issues: Vec<SchemaIssue>,
    pub warnings: Vec<SchemaWarning>,
}

impl SchemaValidation {
    /// True when no issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue messages in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Warning messages in the order they were found.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for SchemaValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Report {
            valid: bool,
            errors: Vec<String>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            warnings: Vec<String>,
        }

        Report {
            valid: self.is_valid(),
            errors: self.errors(),
            warnings: self.warning_messages(),
        }
        .serialize(serializer)
    }
}

/// Validates a parsed schema document.
///
/// All issues are collected, except that a missing or non-array `fields`
/// stops validation right after the title check.
///
/// # Examples
///
/// ```
/// use form_schema_core::{SchemaIssue, validate_document};
/// use serde_json::json;
///
/// let result = validate_document(&json!({
///     "formTitle": "T",
///     "fields": [{"type": "select", "label": "L"}]
/// }));
/// assert_eq!(
///     result.issues,
///     vec![
///         SchemaIssue::MissingFieldId { index: 0 },
///         SchemaIssue::MissingOptions {
///             field_type: "select".into(),
///             field_id: "undefined".into(),
///         },
///     ]
/// );
/// ```
pub fn validate_document(doc: &Value) -> SchemaValidation {
    let mut result = SchemaValidation::default();

    if !is_truthy(doc.get("formTitle")) {
        result.issues.push(SchemaIssue::MissingTitle);
    }

    let Some(fields) = doc.get("fields").and_then(Value::as_array) else {
        result.issues.push(SchemaIssue::FieldsNotArray);
        return result;
    };

    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for (index, field) in fields.iter().enumerate() {
        validate_field(field, index, &mut result);

        let id = field.get("id");
        if !is_truthy(id) {
            continue;
        }
        let id = id.map(value_text).unwrap_or_default();
        if let Some(&first_index) = first_seen.get(&id) {
            result.warnings.push(SchemaWarning::DuplicateFieldId {
                field_id: id,
                first_index,
                index,
            });
        } else {
            first_seen.insert(id, index);
        }
    }

    result
}

fn validate_field(field: &Value, index: usize, result: &mut SchemaValidation) {
    let id = field.get("id");

    if !is_truthy(id) {
        result.issues.push(SchemaIssue::MissingFieldId { index });
    }
    if !is_truthy(field.get("label")) {
        result.issues.push(SchemaIssue::MissingFieldLabel { index });
    }

    let field_type = field.get("type").and_then(Value::as_str);
    let options = field.get("options").and_then(Value::as_array);

    match field_type {
        Some(tag @ ("select" | "radio")) => {
            if options.is_none_or(|options| options.is_empty()) {
                result.issues.push(SchemaIssue::MissingOptions {
                    field_type: tag.to_string(),
                    field_id: display_value(id),
                });
            }
        }
        Some("text" | "email" | "textarea" | "number") => {}
        _ => result.warnings.push(SchemaWarning::UnknownFieldType {
            field_id: display_value(id),
            field_type: display_value(field.get("type")),
        }),
    }

    for (option_index, option) in options.into_iter().flatten().enumerate() {
        if !is_truthy(option.get("value")) || !is_truthy(option.get("label")) {
            result.issues.push(SchemaIssue::InvalidOption {
                option_index,
                field_id: display_value(id),
            });
        }
    }
}

/// JSON truthiness: absent, `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Renders a property the way it appears inside an error message.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::generate_default_schema;

    #[test]
    fn test_missing_title_is_reported() {
        for doc in [
            json!({"fields": []}),
            json!({"formTitle": "", "fields": []}),
            json!({"formTitle": null, "fields": []}),
            json!({"formTitle": 0, "fields": []}),
        ] {
            let result = validate_document(&doc);
            assert!(!result.is_valid());
            assert_eq!(result.errors(), vec!["Form title is required"]);
        }
    }

    #[test]
    fn test_fields_not_array_short_circuits() {
        let result = validate_document(&json!({"formTitle": "T", "fields": {"id": "x"}}));
        assert_eq!(result.issues, vec![SchemaIssue::FieldsNotArray]);

        let result = validate_document(&json!({"formTitle": "T"}));
        assert_eq!(result.errors(), vec!["Fields must be an array"]);
    }

    #[test]
    fn test_non_object_document_has_no_properties() {
        let result = validate_document(&json!([1, 2, 3]));
        assert_eq!(
            result.issues,
            vec![SchemaIssue::MissingTitle, SchemaIssue::FieldsNotArray]
        );
    }

    #[test]
    fn test_field_missing_id_and_label() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [
                {"id": "ok", "type": "text", "label": "Ok"},
                {"type": "text"},
            ]
        }));
        assert_eq!(
            result.errors(),
            vec![
                "Field at index 1 is missing an ID",
                "Field at index 1 is missing a label",
            ]
        );
    }

    #[test]
    fn test_one_missing_options_error_per_field() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [
                {"id": "a", "type": "select", "label": "A"},
                {"id": "b", "type": "radio", "label": "B", "options": []},
            ]
        }));
        assert_eq!(
            result.errors(),
            vec!["SELECT field a requires options", "RADIO field b requires options"]
        );
    }

    #[test]
    fn test_one_error_per_bad_option() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [{
                "id": "size",
                "type": "radio",
                "label": "Size",
                "options": [
                    {"value": "s", "label": "Small"},
                    {"value": "", "label": "Medium"},
                    {"value": "l"},
                    null,
                ]
            }]
        }));
        assert_eq!(
            result.errors(),
            vec![
                "Option 1 in field size is missing value or label",
                "Option 2 in field size is missing value or label",
                "Option 3 in field size is missing value or label",
            ]
        );
    }

    #[test]
    fn test_options_checked_on_any_field_type() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [{
                "id": "name",
                "type": "text",
                "label": "Name",
                "options": [{"label": "orphan"}]
            }]
        }));
        assert_eq!(
            result.errors(),
            vec!["Option 0 in field name is missing value or label"]
        );
    }

    #[test]
    fn test_unknown_type_is_only_a_warning() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [{"id": "dob", "type": "date", "label": "Birthday"}]
        }));
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec![SchemaWarning::UnknownFieldType {
                field_id: "dob".into(),
                field_type: "date".into(),
            }]
        );
    }

    #[test]
    fn test_duplicate_ids_are_warnings() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [
                {"id": "x", "type": "text", "label": "One"},
                {"id": "y", "type": "text", "label": "Two"},
                {"id": "x", "type": "email", "label": "Three"},
            ]
        }));
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec![SchemaWarning::DuplicateFieldId {
                field_id: "x".into(),
                first_index: 0,
                index: 2,
            }]
        );
    }

    #[test]
    fn test_numeric_and_string_ids_collide() {
        let result = validate_document(&json!({
            "formTitle": "T",
            "fields": [
                {"id": 7, "type": "text", "label": "One"},
                {"id": "7", "type": "text", "label": "Two"},
            ]
        }));
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec![SchemaWarning::DuplicateFieldId {
                field_id: "7".into(),
                first_index: 0,
                index: 1,
            }]
        );
    }

    #[test]
    fn test_default_schema_is_valid() {
        let doc = serde_json::to_value(generate_default_schema()).unwrap();
        let result = validate_document(&doc);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"valid": true, "errors": []})
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let doc = json!({
            "fields": [{"type": "radio", "options": [{"value": "a"}]}]
        });
        assert_eq!(validate_document(&doc), validate_document(&doc));
    }
}
