//! HTML markup for a [`Form`].
//!
//! The output is a self-contained `<form>` fragment. Current values are
//! reflected into the markup (`value`, `selected`, `checked`) and each field
//! with an active error gets an inline `<p class="field-error">` beneath its
//! control.

use std::fmt;

use form_schema_core::{FieldValue, FormOption};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::PreviewConfig;
use crate::control::Control;
use crate::form::{Form, FormStatus, RenderedField};

/// Renders the form as an HTML fragment.
///
/// # Examples
///
/// ```
/// use form_schema_core::generate_default_schema;
/// use form_schema_preview::{Form, PreviewConfig, render_html};
///
/// let form = Form::new(&generate_default_schema()).unwrap();
/// let html = render_html(&form, &PreviewConfig::default());
/// assert!(html.contains("<h2>Sample Dynamic Form</h2>"));
/// assert!(html.contains(r#"<input type="text" id="name" name="name""#));
/// assert!(html.contains(">Validate Form</button>"));
/// ```
pub fn render_html(form: &Form, config: &PreviewConfig) -> String {
    FormMarkup { form, config }.to_string()
}

struct FormMarkup<'a> {
    form: &'a Form,
    config: &'a PreviewConfig,
}

impl fmt::Display for FormMarkup<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.form;
        writeln!(out, "<form class=\"dynamic-form\" novalidate>")?;
        writeln!(out, "  <h2>{}</h2>", text(form.title()))?;
        if let Some(description) = form.description().filter(|d| !d.is_empty()) {
            writeln!(out, "  <p class=\"form-description\">{}</p>", text(description))?;
        }

        for field in form.fields() {
            render_field(out, form, field)?;
        }

        let (disabled, label) = if form.status() == FormStatus::Submitting {
            (" disabled", self.config.busy_label.as_str())
        } else {
            ("", self.config.submit_label.as_str())
        };
        writeln!(out, "  <button type=\"submit\"{disabled}>{}</button>", text(label))?;
        writeln!(out, "</form>")
    }
}

fn render_field(out: &mut fmt::Formatter<'_>, form: &Form, field: &RenderedField) -> fmt::Result {
    let id = attr(&field.id);
    let current = form.value(&field.id).map(FieldValue::to_string).unwrap_or_default();
    let error = form.error_for(&field.id);
    let required = if field.rules.is_required() { " required" } else { "" };
    let invalid = if error.is_some() { " aria-invalid=\"true\"" } else { "" };

    writeln!(out, "  <div class=\"form-field\" data-field-id=\"{id}\">")?;
    match &field.control {
        Control::Input { kind, placeholder } => {
            label_for(out, &field.id, &field.label)?;
            writeln!(
                out,
                "    <input type=\"{}\" id=\"{id}\" name=\"{id}\"{} value=\"{}\"{required}{invalid}>",
                kind.as_str(),
                placeholder_attr(placeholder.as_deref()),
                attr(&current),
            )?;
        }
        Control::TextArea { placeholder } => {
            label_for(out, &field.id, &field.label)?;
            writeln!(
                out,
                "    <textarea id=\"{id}\" name=\"{id}\"{}{required}{invalid}>{}</textarea>",
                placeholder_attr(placeholder.as_deref()),
                text(&current),
            )?;
        }
        Control::Select { prompt, options } => {
            label_for(out, &field.id, &field.label)?;
            writeln!(out, "    <select id=\"{id}\" name=\"{id}\"{required}{invalid}>")?;
            writeln!(out, "      <option value=\"\">{}</option>", text(prompt))?;
            for option in options {
                let selected = if option.value == current { " selected" } else { "" };
                writeln!(
                    out,
                    "      <option value=\"{}\"{selected}>{}</option>",
                    attr(&option.value),
                    text(&option.label),
                )?;
            }
            writeln!(out, "    </select>")?;
        }
        Control::Radio { group, options } => {
            writeln!(out, "    <label>{}</label>", text(&field.label))?;
            writeln!(out, "    <div class=\"radio-group\">")?;
            for (index, option) in options.iter().enumerate() {
                render_radio(out, group, index, option, &current, required)?;
            }
            writeln!(out, "    </div>")?;
        }
    }

    if let Some(message) = error {
        writeln!(out, "    <p class=\"field-error\">{}</p>", text(message))?;
    }
    writeln!(out, "  </div>")
}

fn render_radio(
    out: &mut fmt::Formatter<'_>,
    group: &str,
    index: usize,
    option: &FormOption,
    current: &str,
    required: &str,
) -> fmt::Result {
    let input_id = format!("{group}-{index}");
    let checked = if option.value == current { " checked" } else { "" };
    writeln!(
        out,
        "      <div class=\"radio-option\"><input type=\"radio\" id=\"{}\" name=\"{}\" value=\"{}\"{checked}{required}><label for=\"{}\">{}</label></div>",
        attr(&input_id),
        attr(group),
        attr(&option.value),
        attr(&input_id),
        text(&option.label),
    )
}

fn label_for(out: &mut fmt::Formatter<'_>, id: &str, label: &str) -> fmt::Result {
    writeln!(out, "    <label for=\"{}\">{}</label>", attr(id), text(label))
}

fn placeholder_attr(placeholder: Option<&str>) -> String {
    placeholder
        .map(|p| format!(" placeholder=\"{}\"", attr(p)))
        .unwrap_or_default()
}
