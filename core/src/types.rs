//! Schema type definitions for JSON-driven forms.
//!
//! This module defines the data model that flows from the schema editor to
//! the form renderer. The types serialize with [`serde`] using the camelCase
//! keys of the editor's JSON document (`formTitle`, `minLength`, ...).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce;

/// Kind of input a field renders as.
///
/// Unrecognized tags are preserved in [`FieldType::Other`] so that a schema
/// containing them still deserializes; the renderer skips such fields. A
/// `type` that is not a string at all (`null`, `7`) is kept as its JSON text.
///
/// # Examples
///
/// ```
/// use form_schema_core::FieldType;
///
/// assert_eq!(FieldType::from("radio".to_string()), FieldType::Radio);
/// assert_eq!(FieldType::from("date".to_string()), FieldType::Other("date".into()));
/// assert!(FieldType::Select.requires_options());
/// assert_eq!(FieldType::TextArea.as_str(), "textarea");
///
/// let odd: FieldType = serde_json::from_str("7").unwrap();
/// assert_eq!(odd, FieldType::Other("7".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Single-line email input.
    Email,
    /// Drop-down choice populated from the field's options.
    Select,
    /// One exclusive-choice control per option.
    Radio,
    /// Multi-line text input.
    TextArea,
    /// Single-line numeric input.
    Number,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl FieldType {
    /// Returns the tag used in the JSON document.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Other(tag) => tag,
        }
    }

    /// Whether fields of this type need a non-empty option list.
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Whether the renderer knows how to draw this type.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "textarea" => Self::TextArea,
            "number" => Self::Number,
            _ => Self::Other(tag),
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(tag) => Ok(Self::from(tag)),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable choice of a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOption {
    /// Submitted value.
    #[serde(default, deserialize_with = "coerce::text")]
    pub value: String,
    /// Text shown to the user.
    #[serde(default, deserialize_with = "coerce::text")]
    pub label: String,
}

impl FormOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Optional input constraints attached to a field.
///
/// A missing sub-rule means the constraint is not applied. Length bounds of
/// `0` are treated the same as missing ones.
///
/// # Examples
///
/// ```
/// use form_schema_core::ValidationRule;
///
/// let rule = ValidationRule::default()
///     .with_pattern("^[a-z]+$", "Lowercase letters only")
///     .with_min_length(3);
/// assert_eq!(rule.min_length, Some(3));
/// assert_eq!(rule.message.as_deref(), Some("Lowercase letters only"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Regular expression the value must match somewhere.
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pattern: Option<String>,
    /// Message shown when `pattern` does not match.
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    /// Accepted for compatibility; the field-level `required` flag wins.
    #[serde(
        default,
        deserialize_with = "coerce::optional_truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub required: Option<bool>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_length: Option<u64>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<u64>,
}

impl ValidationRule {
    /// Sets a pattern and its failure message.
    pub fn with_pattern(mut self, pattern: &str, message: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self.message = Some(message.to_string());
        self
    }

    /// Sets the minimum length.
    pub fn with_min_length(mut self, n: u64) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, n: u64) -> Self {
        self.max_length = Some(n);
        self
    }
}

/// A single form field.
///
/// Deserialization is lenient: scalar ids, labels and placeholders are
/// stringified, `required` follows JSON truthiness, and `options` or
/// `validation` values of the wrong JSON type are treated as absent.
///
/// # Examples
///
/// ```
/// use form_schema_core::{Field, FieldType, FormOption};
///
/// let field = Field::new("color", FieldType::Radio, "Favourite colour")
///     .with_options(vec![FormOption::new("red", "Red"), FormOption::new("blue", "Blue")])
///     .required();
/// assert!(field.required);
/// assert_eq!(field.option_list().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default, deserialize_with = "coerce::text")]
    pub label: String,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::truthy",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "coerce::options",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<FormOption>>,
    #[serde(
        default,
        deserialize_with = "coerce::validation",
        skip_serializing_if = "Option::is_none"
    )]
    pub validation: Option<ValidationRule>,
}

impl Field {
    /// Creates an optional field with no placeholder, options or rules.
    pub fn new(id: &str, field_type: FieldType, label: &str) -> Self {
        Self {
            id: id.to_string(),
            field_type,
            label: label.to_string(),
            placeholder: None,
            required: false,
            options: None,
            validation: None,
        }
    }

    /// Marks the field as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Sets the option list.
    pub fn with_options(mut self, options: Vec<FormOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Attaches validation rules.
    pub fn with_validation(mut self, validation: ValidationRule) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Returns the options, or an empty slice when none are defined.
    pub fn option_list(&self) -> &[FormOption] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// Top-level form schema.
///
/// # Examples
///
/// ```
/// use form_schema_core::{Field, FieldType, FormSchema};
///
/// let schema = FormSchema::new("Contact")
///     .with_description("Tell us about yourself")
///     .with_field(Field::new("email", FieldType::Email, "Email").required());
///
/// assert_eq!(schema.find_field("email").unwrap().label, "Email");
/// assert_eq!(schema.field_ids(), vec!["email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(default, deserialize_with = "coerce::text")]
    pub form_title: String,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub form_description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl FormSchema {
    /// Creates a schema with a title and no fields.
    pub fn new(title: &str) -> Self {
        Self {
            form_title: title.to_string(),
            form_description: None,
            fields: Vec::new(),
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.form_description = Some(description.to_string());
        self
    }

    /// Appends a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Finds the first field with the given id.
    pub fn find_field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Returns field ids in list order.
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.id.as_str()).collect()
    }
}

/// A submitted scalar value.
///
/// Serialized untagged, so values appear as plain JSON strings, numbers or
/// booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as "not filled in" for a required field.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Bool(checked) => !checked,
            Self::Number(_) => false,
        }
    }

    /// Returns the text when this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Submitted values keyed by field id.
pub type FormValues = BTreeMap<String, FieldValue>;
