//! Field validation rules.
//!
//! Every rule is a pure function of the field value (plus the current
//! password for `confirmPassword`). Failures are values, not errors to
//! propagate: they are shown inline next to the field.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::form::{Field, FormState};
use crate::role::Role;

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;
const MIN_SPECIALTY_LEN: usize = 2;
const MIN_BIO_LEN: usize = 20;
const MIN_AGE: f64 = 13.0;
const MAX_AGE: f64 = 120.0;

/// `local@domain.tld`: no whitespace or extra `@`, and a dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
    AgeOutOfRange,
    InvalidSpecialty,
    BioTooShort,
}

impl FieldError {
    /// Human-readable message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::NameTooShort => "Name must be at least 3 characters.",
            FieldError::InvalidEmail => "Please enter a valid email address.",
            FieldError::PasswordTooShort => "Password must be at least 8 characters.",
            FieldError::PasswordMismatch => "Passwords do not match.",
            FieldError::AgeOutOfRange => "Enter an age between 13 and 120.",
            FieldError::InvalidSpecialty => "Please enter a valid specialty.",
            FieldError::BioTooShort => "Bio must be at least 20 characters.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Outcome of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldError),
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(self) -> Option<FieldError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(error) => Some(error),
        }
    }

    fn check(ok: bool, error: FieldError) -> Self {
        if ok {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(error)
        }
    }
}

/// Length in UTF-16 code units, the unit browsers measure input length in.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn parse_age(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Validates a single field value.
///
/// `form` supplies the current password for `confirmPassword`; no other
/// rule looks at it.
pub fn validate_field(field: Field, value: &str, form: &FormState) -> ValidationResult {
    match field {
        Field::Name => ValidationResult::check(
            text_len(value.trim()) >= MIN_NAME_LEN,
            FieldError::NameTooShort,
        ),
        Field::Email => {
            ValidationResult::check(EMAIL_REGEX.is_match(value), FieldError::InvalidEmail)
        }
        Field::Password => ValidationResult::check(
            text_len(value) >= MIN_PASSWORD_LEN,
            FieldError::PasswordTooShort,
        ),
        Field::ConfirmPassword => ValidationResult::check(
            value == form.get(Field::Password),
            FieldError::PasswordMismatch,
        ),
        Field::Age => ValidationResult::check(
            parse_age(value).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age)),
            FieldError::AgeOutOfRange,
        ),
        Field::Specialty => ValidationResult::check(
            text_len(value.trim()) >= MIN_SPECIALTY_LEN,
            FieldError::InvalidSpecialty,
        ),
        Field::Bio => ValidationResult::check(
            text_len(value.trim()) >= MIN_BIO_LEN,
            FieldError::BioTooShort,
        ),
        // Optional.
        Field::StudyLevel => ValidationResult::Valid,
    }
}

/// Validates every field relevant to `role`.
///
/// Returns all failures in form order, not just the first.
///
/// # Errors
/// Returns the list of `(field, error)` pairs when any relevant field is invalid.
pub fn validate_submission(form: &FormState, role: Role) -> Result<(), Vec<(Field, FieldError)>> {
    let errors: Vec<(Field, FieldError)> = Field::visible_for(role)
        .into_iter()
        .filter_map(|field| {
            validate_field(field, form.get(field), form)
                .error()
                .map(|error| (field, error))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
