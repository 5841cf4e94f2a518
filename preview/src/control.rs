//! Input controls, one variant per renderable field type.

use form_schema_core::{Field, FieldType, FormOption};

/// `type` attribute of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

/// The widget a field renders as.
///
/// # Examples
///
/// ```
/// use form_schema_core::{Field, FieldType, FormOption};
/// use form_schema_preview::Control;
///
/// let field = Field::new("plan", FieldType::Select, "Plan")
///     .with_options(vec![FormOption::new("free", "Free")]);
/// match Control::for_field(&field) {
///     Some(Control::Select { prompt, options }) => {
///         assert_eq!(prompt, "Select Plan");
///         assert_eq!(options.len(), 1);
///     }
///     other => panic!("unexpected control: {other:?}"),
/// }
///
/// let unknown = Field::new("dob", FieldType::Other("date".into()), "Birthday");
/// assert!(Control::for_field(&unknown).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Input {
        kind: InputKind,
        placeholder: Option<String>,
    },
    /// Drop-down whose first entry is an empty-valued prompt.
    Select {
        prompt: String,
        options: Vec<FormOption>,
    },
    /// Exclusive choices sharing the field id as their group name.
    Radio {
        group: String,
        options: Vec<FormOption>,
    },
    TextArea {
        placeholder: Option<String>,
    },
}

impl Control {
    /// Picks the control for a field, or `None` for types with no renderer.
    pub fn for_field(field: &Field) -> Option<Self> {
        let input = |kind| Self::Input {
            kind,
            placeholder: field.placeholder.clone(),
        };

        let control = match &field.field_type {
            FieldType::Text => input(InputKind::Text),
            FieldType::Email => input(InputKind::Email),
            FieldType::Number => input(InputKind::Number),
            FieldType::Select => Self::Select {
                prompt: format!("Select {}", field.label),
                options: field.option_list().to_vec(),
            },
            FieldType::Radio => Self::Radio {
                group: field.id.clone(),
                options: field.option_list().to_vec(),
            },
            FieldType::TextArea => Self::TextArea {
                placeholder: field.placeholder.clone(),
            },
            FieldType::Other(_) => return None,
        };
        Some(control)
    }

    /// Options offered by select and radio controls.
    pub fn options(&self) -> &[FormOption] {
        match self {
            Self::Select { options, .. } | Self::Radio { options, .. } => options,
            Self::Input { .. } | Self::TextArea { .. } => &[],
        }
    }
}
