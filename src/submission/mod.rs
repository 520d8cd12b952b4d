// SPDX-License-Identifier: MPL-2.0
//! Contact submission form.
//!
//! The detail screen owns a [`SubmissionForm`]: the user edits the four
//! fields of a [`ContactForm`], submission validates them all at once with
//! [`validate`], and only a fully valid form produces a
//! [`SubmissionPayload`] that [`submit`] uploads together with the selected
//! image.

mod payload;
mod state;
mod validation;

pub use payload::{load_attachment, submit, SubmissionPayload};
pub use state::{SubmissionForm, SubmitAttempt, SubmitOutcome, SubmitPhase};
pub use validation::{is_valid_email, is_valid_phone, validate, ValidationErrors};

/// Editable fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
    ];

    /// Multipart field name sent to the backend.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FormField::FirstName => "detail-first-name-label",
            FormField::LastName => "detail-last-name-label",
            FormField::Email => "detail-email-label",
            FormField::Phone => "detail-phone-label",
        }
    }

    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            FormField::FirstName => "detail-first-name-placeholder",
            FormField::LastName => "detail-last-name-placeholder",
            FormField::Email => "detail-email-placeholder",
            FormField::Phone => "detail-phone-placeholder",
        }
    }
}

/// Raw user input, stored exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips_each_field() {
        let mut form = ContactForm::default();
        for (i, field) in FormField::ALL.into_iter().enumerate() {
            form.set(field, format!("value-{i}"));
        }
        assert_eq!(form.first_name, "value-0");
        assert_eq!(form.get(FormField::Phone), "value-3");
    }

    #[test]
    fn wire_names_match_backend_fields() {
        let names: Vec<&str> = FormField::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(names, ["first_name", "last_name", "email", "phone"]);
    }
}
