// SPDX-License-Identifier: MPL-2.0
//! Field validation rules.

use super::{ContactForm, FormField};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("static phone pattern"));

/// Per-field error message keys. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// i18n key of the error attached to `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, key)| (*field, *key))
    }

    fn insert(&mut self, field: FormField, key: &'static str) {
        self.0.insert(field, key);
    }
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Exactly ten ASCII digits, no surrounding whitespace.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks every field of `form`.
#[must_use]
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.first_name.trim().is_empty() {
        errors.insert(FormField::FirstName, "validation-first-name-required");
    }
    if form.last_name.trim().is_empty() {
        errors.insert(FormField::LastName, "validation-last-name-required");
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, "validation-email-required");
    } else if !is_valid_email(&form.email) {
        errors.insert(FormField::Email, "validation-email-invalid");
    }

    if form.phone.trim().is_empty() {
        errors.insert(FormField::Phone, "validation-phone-required");
    } else if !is_valid_phone(&form.phone) {
        errors.insert(FormField::Phone, "validation-phone-invalid");
    }

    errors
}
