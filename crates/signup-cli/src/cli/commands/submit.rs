//! Headless registration: drives the overlay controller without a terminal.

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use signup_core::config::Config;
use signup_core::{Field, FieldError, Registration, Role, SignupOverlayController, SubmitOutcome};

#[derive(clap::Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Account role (student or teacher)
    #[arg(long)]
    role: Role,

    #[arg(long, allow_hyphen_values = true)]
    name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    email: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    password: Option<String>,

    #[arg(long = "confirm-password", allow_hyphen_values = true)]
    confirm_password: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    age: Option<String>,

    /// Teacher only
    #[arg(long, allow_hyphen_values = true)]
    specialty: Option<String>,

    /// Teacher only
    #[arg(long, allow_hyphen_values = true)]
    bio: Option<String>,

    /// Student only
    #[arg(long = "study-level", allow_hyphen_values = true)]
    study_level: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl SubmitArgs {
    fn values(&self) -> [(Field, Option<&str>); 8] {
        [
            (Field::Name, self.name.as_deref()),
            (Field::Email, self.email.as_deref()),
            (Field::Password, self.password.as_deref()),
            (Field::ConfirmPassword, self.confirm_password.as_deref()),
            (Field::Age, self.age.as_deref()),
            (Field::Specialty, self.specialty.as_deref()),
            (Field::Bio, self.bio.as_deref()),
            (Field::StudyLevel, self.study_level.as_deref()),
        ]
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum SubmitReport<'a> {
    Accepted {
        registration: &'a Registration,
        message: String,
    },
    Rejected {
        errors: Vec<ErrorReport>,
    },
}

#[derive(Serialize)]
struct ErrorReport {
    field: Field,
    error: FieldError,
    message: &'static str,
}

/// Fills the form for `args.role`, submits it and prints the outcome.
///
/// # Errors
/// Returns an error if the JSON report cannot be serialized.
pub fn run(config: &Config, args: &SubmitArgs) -> Result<ExitCode> {
    let mut controller = SignupOverlayController::new(config);
    // No timers run headlessly; the focus continuation is simply dropped.
    let _ = controller.open(args.role);

    for (field, value) in args.values() {
        let Some(value) = value else { continue };
        if !controller.is_field_visible(field) {
            tracing::warn!(field = %field, role = %args.role, "ignoring field not shown for role");
            continue;
        }
        controller.input(field, value);
    }

    match controller.submit() {
        SubmitOutcome::Accepted(registration) => {
            if args.json {
                let report = SubmitReport::Accepted {
                    message: registration.message(),
                    registration: &registration,
                };
                print_json(&report)?;
            } else {
                println!("{}", registration.headline());
                println!("{}", registration.message());
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected { errors, .. } => {
            if args.json {
                let errors = errors
                    .into_iter()
                    .map(|(field, error)| ErrorReport {
                        field,
                        error,
                        message: error.message(),
                    })
                    .collect();
                print_json(&SubmitReport::Rejected { errors })?;
            } else {
                for (field, error) in errors {
                    println!("{field}: {error}");
                }
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Ignored => anyhow::bail!("signup form was not open"),
    }
}

fn print_json(report: &SubmitReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize submit report")?;
    println!("{json}");
    Ok(())
}
