// SPDX-License-Identifier: MPL-2.0
//! Submission lifecycle of the detail screen form.

use super::payload::SubmissionPayload;
use super::validation::{validate, ValidationErrors};
use super::{ContactForm, FormField};
use crate::error::Error;

/// Whether a submission is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// Result of pressing the submit control.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// A submission is already outstanding; nothing was sent.
    InFlight,
    /// Validation failed; the errors are stored on the form.
    Invalid(ValidationErrors),
    /// The form is valid and is now submitting this payload.
    Ready(SubmissionPayload),
}

/// How a submission ended.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(Error),
}

/// Form values, their last validation result and the submission phase.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    values: ContactForm,
    errors: ValidationErrors,
    phase: SubmitPhase,
}

impl SubmissionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(&self) -> &ContactForm {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Stores user input for `field` and drops its error until the next
    /// submit.
    pub fn set_field(&mut self, field: FormField, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the form and, if valid, enters the submitting phase.
    pub fn begin_submit(&mut self, image_url: &str) -> SubmitAttempt {
        if self.is_submitting() {
            tracing::debug!("submit pressed while a submission is in flight");
            return SubmitAttempt::InFlight;
        }

        let errors = validate(&self.values);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "form rejected by validation");
            self.errors = errors.clone();
            return SubmitAttempt::Invalid(errors);
        }

        self.errors = ValidationErrors::default();
        self.phase = SubmitPhase::Submitting;
        SubmitAttempt::Ready(SubmissionPayload::new(&self.values, image_url))
    }

    /// Leaves the submitting phase.
    ///
    /// Returns `None` when no submission was outstanding, so a late or
    /// duplicated result is never reported twice. Field values are kept in
    /// both cases.
    pub fn finish_submit(&mut self, result: Result<(), Error>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            tracing::warn!("submission result received with nothing in flight, dropping it");
            return None;
        }
        self.phase = SubmitPhase::Editing;

        Some(match result {
            Ok(()) => {
                tracing::info!("submission accepted");
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                SubmitOutcome::Failed(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.set_field(FormField::FirstName, "Ada".into());
        form.set_field(FormField::LastName, "Lovelace".into());
        form.set_field(FormField::Email, "ada@example.com".into());
        form.set_field(FormField::Phone, "1234567890".into());
        form
    }

    #[test]
    fn invalid_form_stores_errors_and_stays_editing() {
        let mut form = SubmissionForm::new();
        let attempt = form.begin_submit("https://img.test/1.jpg");

        let SubmitAttempt::Invalid(errors) = attempt else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.phase(), SubmitPhase::Editing);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = SubmissionForm::new();
        form.begin_submit("https://img.test/1.jpg");

        form.set_field(FormField::Email, "still wrong".into());
        assert!(!form.errors().contains(FormField::Email));
        assert!(form.errors().contains(FormField::Phone));
    }

    #[test]
    fn valid_form_yields_payload_and_blocks_resubmission() {
        let mut form = filled();

        let SubmitAttempt::Ready(payload) = form.begin_submit("https://img.test/1.jpg") else {
            panic!("expected a payload");
        };
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.image_url, "https://img.test/1.jpg");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit("https://img.test/1.jpg"), SubmitAttempt::InFlight);
    }

    #[test]
    fn success_is_reported_once() {
        let mut form = filled();
        form.begin_submit("https://img.test/1.jpg");

        assert!(matches!(form.finish_submit(Ok(())), Some(SubmitOutcome::Succeeded)));
        assert!(form.finish_submit(Ok(())).is_none());
        assert_eq!(form.phase(), SubmitPhase::Editing);
    }

    #[test]
    fn failure_keeps_values_for_retry() {
        let mut form = filled();
        form.begin_submit("https://img.test/1.jpg");

        let outcome = form.finish_submit(Err(Error::Status(500)));
        assert!(matches!(outcome, Some(SubmitOutcome::Failed(Error::Status(500)))));
        assert_eq!(form.values().first_name, "Ada");
        assert_eq!(form.values().phone, "1234567890");

        assert!(matches!(
            form.begin_submit("https://img.test/1.jpg"),
            SubmitAttempt::Ready(_)
        ));
    }
}
