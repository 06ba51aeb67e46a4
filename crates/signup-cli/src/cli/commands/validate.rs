//! Single-field validation.

use std::process::ExitCode;

use signup_core::{Field, FormState, ValidationResult, validate_field};

/// Prints `valid` or the field's error message.
pub fn run(field: Field, value: &str, password: &str) -> ExitCode {
    let form = FormState::new().with(Field::Password, password);

    match validate_field(field, value, &form) {
        ValidationResult::Valid => {
            println!("valid");
            ExitCode::SUCCESS
        }
        ValidationResult::Invalid(error) => {
            println!("{error}");
            ExitCode::FAILURE
        }
    }
}
