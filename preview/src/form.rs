//! Interactive form model built from a validated schema.
//!
//! A [`Form`] owns one [`RenderedField`] per renderable schema field, the
//! current value of each, and the field-level error messages. It moves
//! through a small state machine on every submission:
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──finish_submit──▶ Idle
//!                                 └──any rule fails──▶ IdleWithErrors
//! ```
//!
//! [`Form::submit`] runs both steps in one call; the two halves exist so a
//! host can show the busy state while its own submission work is pending.
//!
//! There is no terminal state. Once the form has been submitted, changing a
//! value re-checks that field immediately.

use std::collections::BTreeMap;

use form_schema_core::{FieldValue, FormSchema, FormValues};
use tracing::{debug, info};

use crate::control::Control;
use crate::error::{PreviewError, Result};
use crate::rules::FieldRules;

/// A schema field paired with its control and compiled rules.
#[derive(Debug, Clone)]
pub struct RenderedField {
    pub id: String,
    pub label: String,
    pub control: Control,
    pub rules: FieldRules,
}

/// Where a form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Validation is running; the submit control is disabled.
    Submitting,
    /// The last submission was blocked by at least one field error.
    IdleWithErrors,
}

/// Result of [`Form::submit`] and [`Form::finish_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed and the callback ran once.
    Submitted,
    /// Submission was blocked; messages keyed by field id.
    Blocked { errors: BTreeMap<String, String> },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// A form ready for input.
///
/// # Examples
///
/// ```
/// use form_schema_core::generate_default_schema;
/// use form_schema_preview::{Form, SubmitOutcome};
///
/// let mut form = Form::new(&generate_default_schema()).unwrap();
///
/// let outcome = form.submit(|_| unreachable!("blocked"));
/// assert!(!outcome.is_submitted());
/// assert_eq!(form.error_for("name"), Some("Full Name is required"));
///
/// form.set_value("name", "Ada Lovelace").unwrap();
/// let mut received = None;
/// assert_eq!(form.submit(|values| received = Some(values)), SubmitOutcome::Submitted);
/// assert_eq!(received.unwrap()["name"].to_string(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    title: String,
    description: Option<String>,
    fields: Vec<RenderedField>,
    values: BTreeMap<String, FieldValue>,
    errors: BTreeMap<String, String>,
    status: FormStatus,
    submit_count: usize,
}

impl Form {
    /// Builds the form for a schema that already passed validation.
    ///
    /// Fields whose type has no control are skipped silently; they are not
    /// shown and never submitted.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidPattern`] if a field's pattern does not
    /// compile.
    pub fn new(schema: &FormSchema) -> Result<Self> {
        let mut fields = Vec::with_capacity(schema.fields.len());
        let mut values = BTreeMap::new();

        for field in &schema.fields {
            let Some(control) = Control::for_field(field) else {
                debug!(
                    field = %field.id,
                    field_type = %field.field_type,
                    "Skipping field with unsupported type"
                );
                continue;
            };
            let rules = FieldRules::compile(field)?;
            values.insert(field.id.clone(), FieldValue::default());
            fields.push(RenderedField {
                id: field.id.clone(),
                label: field.label.clone(),
                control,
                rules,
            });
        }

        Ok(Self {
            title: schema.form_title.clone(),
            description: schema.form_description.clone(),
            fields,
            values,
            errors: BTreeMap::new(),
            status: FormStatus::Idle,
            submit_count: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rendered fields in schema order.
    pub fn fields(&self) -> &[RenderedField] {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    /// Current field errors keyed by field id.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error_for(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Current values of all rendered fields.
    pub fn values(&self) -> FormValues {
        self.values.clone()
    }

    /// Records user input for a field.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::UnknownField`] if no rendered field has `id`.
    pub fn set_value(&mut self, id: &str, value: impl Into<FieldValue>) -> Result<()> {
        let Some(slot) = self.values.get_mut(id) else {
            return Err(PreviewError::UnknownField(id.to_string()));
        };
        *slot = value.into();

        if self.submit_count > 0 {
            self.revalidate(id);
        }
        Ok(())
    }

    /// Validates every field and, if all pass, hands the values to
    /// `on_submit` exactly once.
    ///
    /// Equivalent to [`begin_submit`](Self::begin_submit) followed by
    /// [`finish_submit`](Self::finish_submit). The form stays borrowed for
    /// the whole call, so a second submission cannot overlap.
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues),
    {
        if !self.begin_submit() {
            return self.blocked();
        }
        self.finish_submit(on_submit)
    }

    /// Starts a submission: the status becomes [`FormStatus::Submitting`]
    /// and every field is checked.
    ///
    /// Returns `true` when all fields pass; the form then stays
    /// `Submitting`, with the submit control disabled, until
    /// [`finish_submit`](Self::finish_submit). Otherwise the status becomes
    /// [`FormStatus::IdleWithErrors`] and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_schema_core::generate_default_schema;
    /// use form_schema_preview::{Form, FormStatus};
    ///
    /// let mut form = Form::new(&generate_default_schema()).unwrap();
    /// form.set_value("name", "Ada").unwrap();
    ///
    /// assert!(form.begin_submit());
    /// assert_eq!(form.status(), FormStatus::Submitting);
    /// assert!(!form.is_submit_enabled());
    ///
    /// assert!(form.finish_submit(|_| {}).is_submitted());
    /// assert!(form.is_submit_enabled());
    /// ```
    pub fn begin_submit(&mut self) -> bool {
        self.status = FormStatus::Submitting;
        self.submit_count += 1;

        self.errors = self.collect_errors(None);
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "Submission blocked by field errors");
            self.status = FormStatus::IdleWithErrors;
            return false;
        }
        true
    }

    /// Completes the submission in flight, handing the values to
    /// `on_submit` and returning the form to [`FormStatus::Idle`].
    ///
    /// With no submission in flight one is started first, so a blocked
    /// form reports [`SubmitOutcome::Blocked`] and the callback never runs.
    pub fn finish_submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues),
    {
        if self.status != FormStatus::Submitting && !self.begin_submit() {
            return self.blocked();
        }

        let values = self.values();
        info!(fields = values.len(), "Form submitted");
        on_submit(values);
        self.status = FormStatus::Idle;
        SubmitOutcome::Submitted
    }

    fn blocked(&self) -> SubmitOutcome {
        SubmitOutcome::Blocked {
            errors: self.errors.clone(),
        }
    }

    fn revalidate(&mut self, id: &str) {
        match self.collect_errors(Some(id)).remove(id) {
            Some(message) => {
                debug!(field = %id, %message, "Field still invalid");
                self.errors.insert(id.to_string(), message);
            }
            None => {
                self.errors.remove(id);
            }
        }
        if self.errors.is_empty() && self.status == FormStatus::IdleWithErrors {
            self.status = FormStatus::Idle;
        }
    }

    /// Checks fields (optionally just those with `only` as id). When ids
    /// repeat, the last field with that id decides.
    fn collect_errors(&self, only: Option<&str>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            if only.is_some_and(|id| id != field.id) {
                continue;
            }
            let value = self.values.get(&field.id).cloned().unwrap_or_default();
            match field.rules.check(&value) {
                Some(message) => {
                    errors.insert(field.id.clone(), message.to_string());
                }
                None => {
                    errors.remove(&field.id);
                }
            }
        }
        errors
    }
}
