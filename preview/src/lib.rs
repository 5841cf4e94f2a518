//! Form rendering for JSON form schemas.
//!
//! This crate turns a validated [`FormSchema`](form_schema_core::FormSchema)
//! into something a user can fill in:
//!
//! - [`FieldRules`] — per-field constraints (required, length bounds,
//!   pattern) compiled once from the schema.
//! - [`Control`] — the widget each field type maps to.
//! - [`Form`] — field values, inline errors and the submit cycle.
//! - [`render_html`] — an HTML fragment for a form.
//! - [`Preview`] / [`SchemaEditor`] — the host loop that re-parses editor
//!   text on every change and either shows the form or the schema errors.
//!
//! # Quick start
//!
//! ```
//! use form_schema_preview::{PreviewConfig, SchemaEditor, submission_report};
//!
//! let mut editor = SchemaEditor::new(PreviewConfig::default());
//! let form = editor.preview_mut().form_mut().unwrap();
//! form.set_value("name", "Ada").unwrap();
//!
//! let mut report = String::new();
//! form.submit(|values| report = submission_report(&values, 2));
//! assert!(report.starts_with("Form Validated"));
//! ```

mod config;
mod control;
mod error;
mod form;
mod html;
mod rules;
mod shell;

pub use config::{DEFAULT_BUSY_LABEL, DEFAULT_SUBMIT_LABEL, PreviewConfig};
pub use control::{Control, InputKind};
pub use error::{PreviewError, Result};
pub use form::{Form, FormStatus, RenderedField, SubmitOutcome};
pub use html::render_html;
pub use rules::{Constraint, DEFAULT_PATTERN_MESSAGE, FieldRules};
pub use shell::{PLACEHOLDER_MESSAGE, Preview, SchemaEditor, submission_report};
