//! Core domain for the signup overlay.
//!
//! Everything here is independent of any rendering surface:
//! - `role`: student/teacher roles and their display copy
//! - `form`: field registry and form values
//! - `validation`: per-field rules and submission checks
//! - `controller`: the overlay state machine
//! - `config`: user configuration (`${SIGNUP_HOME}/config.toml`)

pub mod config;
pub mod controller;
pub mod form;
pub mod role;
pub mod validation;

pub use controller::{
    Deferred, DeferredAction, OverlayState, Presence, Registration, RejectionCue,
    SignupOverlayController, Stage, SubmitOutcome, Ticket, TimerCommand,
};
pub use form::{Field, FieldGroup, FormState, InputKind};
pub use role::{Role, RoleCopy};
pub use validation::{FieldError, ValidationResult, validate_field, validate_submission};
