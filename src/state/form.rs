//! Contact form values, validation, and the simulated submission lifecycle.
//!
//! DESIGN
//! ======
//! Validation accumulates every failing field at once. Submission is a two
//! step transition: [`FormState::try_submit`] moves to `Sending`, the host
//! waits out the simulated round trip, then [`FormState::finish_submission`]
//! resets the form. The wait itself lives in the component so this module
//! stays synchronous and testable.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};

/// `local@domain.tld` with no whitespace or extra `@`.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Input `name`/`id` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Id of the inline error element for this field.
    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}-error", self.name())
    }
}

/// A field-level validation failure; `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameTooShort => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort => Field::Message,
        }
    }
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Check one field's value. Length rules count characters after trimming.
///
/// # Errors
///
/// Returns the field's [`FieldError`] when the value fails its rule.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let ok = match field {
        Field::Name => value.chars().count() >= NAME_MIN_CHARS,
        Field::Email => is_valid_email(value),
        Field::Message => value.chars().count() >= MESSAGE_MIN_CHARS,
    };
    if ok {
        Ok(())
    } else {
        Err(match field {
            Field::Name => FieldError::NameTooShort,
            Field::Email => FieldError::InvalidEmail,
            Field::Message => FieldError::MessageTooShort,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Validate every field, collecting all failures in field order.
///
/// # Errors
///
/// Returns every failing field's error when any field is invalid.
pub fn validate_form(form: &ContactForm) -> Result<(), Vec<FieldError>> {
    let errors = Field::ALL
        .iter()
        .filter_map(|field| validate_field(*field, form.value(*field)).err())
        .collect::<Vec<_>>();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: ContactForm,
    errors: BTreeMap<Field, FieldError>,
    pub status: SubmitStatus,
}

impl FormState {
    /// Keystroke handler: store the value and clear that field's error.
    pub fn input(&mut self, field: Field, value: String) {
        self.values.set_value(field, value);
        self.clear_error(field);
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Blur handler: validate one field and show or clear its error.
    ///
    /// Returns `true` when the field is valid.
    pub fn validate_field(&mut self, field: Field) -> bool {
        match validate_field(field, self.values.value(field)) {
            Ok(()) => {
                self.clear_error(field);
                true
            }
            Err(err) => {
                self.errors.insert(field, err);
                false
            }
        }
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        self.errors.values().copied().collect()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Label for the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
        }
    }

    /// Submit handler. Validates every field; on success moves to `Sending`.
    ///
    /// Returns `true` when the caller should start the simulated round trip.
    /// A submit while already sending is ignored.
    pub fn try_submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.errors.clear();
        match validate_form(&self.values) {
            Ok(()) => {
                self.status = SubmitStatus::Sending;
                true
            }
            Err(errors) => {
                for err in errors {
                    self.errors.insert(err.field(), err);
                }
                false
            }
        }
    }

    /// End of the simulated round trip: re-enable submit and reset fields.
    pub fn finish_submission(&mut self) {
        self.status = SubmitStatus::Idle;
        self.values = ContactForm::default();
        self.errors.clear();
    }
}
