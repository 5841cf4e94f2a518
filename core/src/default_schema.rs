//! The schema used to seed a fresh editor.

use serde::Serialize;

use crate::{Field, FieldType, FormSchema};

/// Indentation used when pretty-printing schema text.
pub const DEFAULT_INDENT: usize = 2;

/// Returns the starter schema: one required "Full Name" text field.
///
/// The result always passes [`validate_document`](crate::validate_document).
///
/// # Examples
///
/// ```
/// use form_schema_core::generate_default_schema;
///
/// let schema = generate_default_schema();
/// assert_eq!(schema.form_title, "Sample Dynamic Form");
/// assert!(schema.find_field("name").unwrap().required);
/// ```
pub fn generate_default_schema() -> FormSchema {
    FormSchema::new("Sample Dynamic Form")
        .with_description("Please fill out the form")
        .with_field(
            Field::new("name", FieldType::Text, "Full Name")
                .required()
                .with_placeholder("Enter your full name"),
        )
}

/// Pretty-prints the starter schema as initial editor text.
pub fn default_schema_text(indent: usize) -> String {
    to_pretty_json(&generate_default_schema(), indent)
}

/// Pretty-prints any serializable value with `indent` spaces per level.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(err) = value.serialize(&mut serializer) {
        return format!("\"<unserializable: {err}>\"");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
