//! Compilation of per-field validation rules.
//!
//! A [`Field`]'s `required` flag and its optional [`ValidationRule`] are
//! turned into an ordered list of [`Constraint`]s once, when the form is
//! built. Checking a value walks that list and reports the first failure:
//!
//! 1. required (message `"{label} is required"`);
//! 2. an empty value that is not required passes everything else;
//! 3. maximum length, minimum length, pattern.
//!
//! Length and pattern constraints only look at text values. Lengths count
//! UTF-16 code units, the way browser form validation measures strings, so
//! `"😀"` has length 2.
//!
//! [`ValidationRule`]: form_schema_core::ValidationRule

use form_schema_core::{Field, FieldValue};
use regex::Regex;

use crate::error::{PreviewError, Result};

/// Message used when a pattern fails and the rule has no message of its own.
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid input";

/// One compiled check and the message shown when it fails.
#[derive(Debug, Clone)]
pub enum Constraint {
    Required { message: String },
    MaxLength { limit: usize, message: String },
    MinLength { limit: usize, message: String },
    /// Matches anywhere in the value, not anchored.
    Pattern { regex: Regex, message: String },
}

impl Constraint {
    /// The failure message.
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::MaxLength { message, .. }
            | Self::MinLength { message, .. }
            | Self::Pattern { message, .. } => message,
        }
    }

    fn is_satisfied_by(&self, value: &FieldValue) -> bool {
        let length = |text: &str| text.encode_utf16().count();
        match (self, value) {
            (Self::Required { .. }, value) => !value.is_empty(),
            (Self::MaxLength { limit, .. }, FieldValue::Text(text)) => {
                length(text) <= *limit
            }
            (Self::MinLength { limit, .. }, FieldValue::Text(text)) => {
                length(text) >= *limit
            }
            (Self::Pattern { regex, .. }, FieldValue::Text(text)) => regex.is_match(text),
            _ => true,
        }
    }
}

/// The constraints of one field, in evaluation order.
///
/// # Examples
///
/// ```
/// use form_schema_core::{Field, FieldType, FieldValue, ValidationRule};
/// use form_schema_preview::FieldRules;
///
/// let field = Field::new("code", FieldType::Text, "Code")
///     .required()
///     .with_validation(ValidationRule::default().with_min_length(3));
/// let rules = FieldRules::compile(&field).unwrap();
///
/// assert_eq!(rules.check(&FieldValue::from("")), Some("Code is required"));
/// assert_eq!(rules.check(&FieldValue::from("ab")), Some("Minimum length is 3"));
/// assert_eq!(rules.check(&FieldValue::from("abc")), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    constraints: Vec<Constraint>,
}

impl FieldRules {
    /// Compiles the rules for `field`.
    ///
    /// Empty patterns and zero length bounds are ignored, as is the
    /// `validation.required` flag (only `field.required` counts).
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidPattern`] if `validation.pattern` is not
    /// a valid regular expression.
    pub fn compile(field: &Field) -> Result<Self> {
        let mut constraints = Vec::new();

        if field.required {
            constraints.push(Constraint::Required {
                message: format!("{} is required", field.label),
            });
        }

        let Some(validation) = &field.validation else {
            return Ok(Self { constraints });
        };

        if let Some(n) = validation.max_length.filter(|n| *n > 0) {
            constraints.push(Constraint::MaxLength {
                limit: usize::try_from(n).unwrap_or(usize::MAX),
                message: format!("Maximum length is {n}"),
            });
        }
        if let Some(n) = validation.min_length.filter(|n| *n > 0) {
            constraints.push(Constraint::MinLength {
                limit: usize::try_from(n).unwrap_or(usize::MAX),
                message: format!("Minimum length is {n}"),
            });
        }
        if let Some(pattern) = validation.pattern.as_deref().filter(|p| !p.is_empty()) {
            let regex = Regex::new(pattern).map_err(|source| PreviewError::InvalidPattern {
                field_id: field.id.clone(),
                source,
            })?;
            let message = validation
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_PATTERN_MESSAGE)
                .to_string();
            constraints.push(Constraint::Pattern { regex, message });
        }

        Ok(Self { constraints })
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether the field must be filled in.
    pub fn is_required(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::Required { .. }))
    }

    /// Returns the message of the first failing constraint, if any.
    pub fn check(&self, value: &FieldValue) -> Option<&str> {
        for constraint in &self.constraints {
            let required = matches!(constraint, Constraint::Required { .. });
            if !required && value.is_empty() {
                return None;
            }
            if !constraint.is_satisfied_by(value) {
                return Some(constraint.message());
            }
        }
        None
    }
}
