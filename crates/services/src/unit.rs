use std::fmt;

use assignment_core::model::{FieldKey, FieldValues};
use assignment_core::{Marked, Notice, Notifier, ValidationFailure, ValidationRule, check};
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::sink::CompletionSink;

/// Static description of one submittable form: its fields, rule and wording.
pub trait FormSpec: 'static {
    type Field: FieldKey;

    /// Short name used in logs.
    const NAME: &'static str;

    fn rule() -> ValidationRule<Self::Field>;

    fn success_notice() -> Notice;

    fn failure_notice(failure: &ValidationFailure) -> Notice;
}

/// What a submit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the parent was told; `Marked::Already` on repeats.
    Accepted(Marked),
    /// Validation failed; nothing but a notice happened.
    Rejected(ValidationFailure),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// A form with its own field values, gated by its rule.
pub struct FormUnit<F: FormSpec> {
    values: FieldValues<F::Field>,
    rule: ValidationRule<F::Field>,
}

impl<F: FormSpec> FormUnit<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(FieldValues::new())
    }

    #[must_use]
    pub fn with_values(values: FieldValues<F::Field>) -> Self {
        Self {
            values,
            rule: F::rule(),
        }
    }

    /// Field edit. Local only; nothing is validated or reported.
    pub fn set(&mut self, field: F::Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    #[must_use]
    pub fn value(&self, field: F::Field) -> &str {
        self.values.value(field)
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues<F::Field> {
        &self.values
    }

    #[must_use]
    pub fn rule(&self) -> &ValidationRule<F::Field> {
        &self.rule
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        check(&self.values, &self.rule).is_ok()
    }

    /// Validate and, on success, report completion through `sink`.
    ///
    /// A failed check only emits a failure notice. Repeating a successful
    /// submit is harmless because sinks are idempotent.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the sink cannot record completion.
    pub fn submit(
        &self,
        sink: &mut (impl CompletionSink + ?Sized),
        notifier: &mut dyn Notifier,
    ) -> Result<SubmitOutcome, ServiceError> {
        match check(&self.values, &self.rule) {
            Ok(()) => {
                notifier.show(F::success_notice());
                let marked = sink.notify_complete(notifier)?;
                if marked.is_new() {
                    info!(form = F::NAME, "form completed");
                } else {
                    debug!(form = F::NAME, "form resubmitted after completion");
                }
                Ok(SubmitOutcome::Accepted(marked))
            }
            Err(failure) => {
                debug!(form = F::NAME, unmet = failure.unmet, "form rejected");
                notifier.show(F::failure_notice(&failure));
                Ok(SubmitOutcome::Rejected(failure))
            }
        }
    }
}

impl<F: FormSpec> Default for FormUnit<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormSpec> Clone for FormUnit<F> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            rule: self.rule.clone(),
        }
    }
}

impl<F: FormSpec> PartialEq for FormUnit<F> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<F: FormSpec> fmt::Debug for FormUnit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormUnit")
            .field("form", &F::NAME)
            .field("values", &self.values)
            .finish()
    }
}
