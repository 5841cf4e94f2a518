//! The editor host: re-parses schema text on every edit and either exposes
//! a ready [`Form`] or the list of reasons the schema was rejected.
//!
//! A rejected schema never renders partially; the preview shows
//! [`PLACEHOLDER_MESSAGE`] (or the configured replacement) instead.

use form_schema_core::{FormValues, SchemaError, default_schema_text, parse_schema, to_pretty_json};
use tracing::{debug, warn};

use crate::config::PreviewConfig;
use crate::form::Form;
use crate::html::render_html;

/// Shown in place of the form while the schema is unusable.
pub const PLACEHOLDER_MESSAGE: &str = "Please provide a valid JSON schema";

/// What the preview pane currently shows.
#[derive(Debug, Clone)]
pub enum Preview {
    /// The schema is valid; `warnings` are non-fatal observations.
    Ready { form: Form, warnings: Vec<String> },
    /// The schema is unusable; `errors` are shown under the editor.
    Rejected { errors: Vec<String> },
}

impl Preview {
    /// Parses, validates and builds the form for a piece of editor text.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_schema_preview::Preview;
    ///
    /// let preview = Preview::from_text("{ oops");
    /// assert_eq!(preview.errors(), ["Invalid JSON format"]);
    /// assert!(preview.form().is_none());
    /// ```
    pub fn from_text(text: &str) -> Self {
        let parsed = match parse_schema(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                if let SchemaError::InvalidJson(source) = &err {
                    warn!(error = %source, "Error parsing schema JSON");
                } else {
                    debug!(error = %err, "Schema rejected");
                }
                return Self::Rejected {
                    errors: err.messages(),
                };
            }
        };

        match Form::new(&parsed.schema) {
            Ok(form) => Self::Ready {
                form,
                warnings: parsed.warnings.iter().map(ToString::to_string).collect(),
            },
            Err(err) => {
                debug!(error = %err, "Schema rejected");
                Self::Rejected {
                    errors: vec![err.to_string()],
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Schema errors; empty when the form is ready.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Ready { .. } => &[],
            Self::Rejected { errors } => errors,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Ready { warnings, .. } => warnings,
            Self::Rejected { .. } => &[],
        }
    }

    pub fn form(&self) -> Option<&Form> {
        match self {
            Self::Ready { form, .. } => Some(form),
            Self::Rejected { .. } => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Self::Ready { form, .. } => Some(form),
            Self::Rejected { .. } => None,
        }
    }

    /// The preview pane: the form markup, or the placeholder paragraph.
    pub fn render(&self, config: &PreviewConfig) -> String {
        match self {
            Self::Ready { form, .. } => render_html(form, config),
            Self::Rejected { .. } => format!(
                "<p class=\"preview-placeholder\">{}</p>\n",
                html_escape::encode_text(&config.empty_preview_message)
            ),
        }
    }
}

/// Editor text plus the preview derived from it.
///
/// # Examples
///
/// ```
/// use form_schema_preview::{PreviewConfig, SchemaEditor};
///
/// let mut editor = SchemaEditor::new(PreviewConfig::default());
/// assert!(editor.preview().is_ready());
///
/// editor.set_text(r#"{"fields": "not-a-list"}"#);
/// assert_eq!(
///     editor.preview().errors(),
///     ["Form title is required", "Fields must be an array"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SchemaEditor {
    config: PreviewConfig,
    text: String,
    preview: Preview,
}

impl SchemaEditor {
    /// Starts with the default schema, pretty-printed at the configured
    /// indent.
    pub fn new(config: PreviewConfig) -> Self {
        let text = default_schema_text(config.indent);
        let preview = Preview::from_text(&text);
        Self {
            config,
            text,
            preview,
        }
    }

    /// Replaces the editor text and rebuilds the preview from scratch.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.preview = Preview::from_text(&self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut Preview {
        &mut self.preview
    }

    /// Renders the preview pane with this editor's settings.
    pub fn render(&self) -> String {
        self.preview.render(&self.config)
    }
}

/// Confirmation text shown after a successful submission.
pub fn submission_report(values: &FormValues, indent: usize) -> String {
    format!("Form Validated\n\n{}", to_pretty_json(values, indent))
}
