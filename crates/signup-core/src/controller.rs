//! Signup overlay controller.
//!
//! Owns the overlay state machine, the field registry (values plus per-field
//! errors) and focus. It never touches a rendering surface: front ends read
//! its accessors to draw and feed it user intents.
//!
//! ## State machine
//!
//! ```text
//! Closed ──open(r)──▶ Open(r, Editing) ──switch_role──▶ Open(r', Editing)
//!   ▲                      │ submit (all valid)
//!   │                      ▼
//!   └──close/ack── Open(r, Submitted)
//! ```
//!
//! ## Deferred continuations
//!
//! Focus-after-open and hide-after-close are returned as `TimerCommand`s.
//! The driver arms a timer per `Deferred` and calls `fire(ticket)` when it
//! elapses. Each action keeps at most one live ticket; re-opening or
//! re-closing cancels the previous one, and a stale ticket fires as a no-op.

use std::time::Duration;

use enum_map::EnumMap;
use serde::Serialize;

use crate::config::{Config, Timings};
use crate::form::{Field, FormState};
use crate::role::{Role, RoleCopy};
use crate::validation::{self, FieldError, ValidationResult};

/// Identifies one armed deferred continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

/// Work to run after a transition delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Move focus to the first field once the open transition settles.
    FocusFirstField,
    /// Stop drawing the overlay once the close transition settles.
    HideOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub ticket: Ticket,
    pub action: DeferredAction,
    pub delay: Duration,
}

/// Timer requests returned by controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Schedule(Deferred),
    Cancel(Ticket),
}

/// Whether the overlay is drawn at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Hidden,
    Visible,
    /// Closed but still drawn until the hide continuation fires.
    Closing,
}

/// Account summary shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub role: Role,
    pub name: String,
    pub email: String,
}

impl Registration {
    pub fn headline(&self) -> &'static str {
        "Account Created Successfully"
    }

    pub fn message(&self) -> String {
        format!(
            "Your account has been created as a {}. You can now log in and start using the platform.",
            self.role.display_name()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Editing,
    Submitted(Registration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open { role: Role, stage: Stage },
}

/// Visual rejection cue: a brief horizontal shake of the form panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionCue {
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit (overlay closed or already submitted).
    Ignored,
    /// At least one relevant field is invalid; every failure is listed.
    Rejected {
        errors: Vec<(Field, FieldError)>,
        cue: RejectionCue,
    },
    Accepted(Registration),
}

#[derive(Debug, Clone)]
pub struct SignupOverlayController {
    state: OverlayState,
    presence: Presence,
    /// Role drawn while `Closing`, after `state` already dropped it.
    last_role: Option<Role>,
    form: FormState,
    errors: EnumMap<Field, Option<FieldError>>,
    focused: Option<Field>,
    timings: Timings,
    copy: EnumMap<Role, RoleCopy>,
    next_ticket: u64,
    pending_focus: Option<Ticket>,
    pending_hide: Option<Ticket>,
}

impl Default for SignupOverlayController {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl SignupOverlayController {
    pub fn new(config: &Config) -> Self {
        Self {
            state: OverlayState::Closed,
            presence: Presence::Hidden,
            last_role: None,
            form: FormState::new(),
            errors: EnumMap::default(),
            focused: None,
            timings: config.timings,
            copy: EnumMap::from_fn(|role| config.copy_for(role)),
            next_ticket: 0,
            pending_focus: None,
            pending_hide: None,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Opens the overlay for `role` (or re-targets it when already open).
    pub fn open(&mut self, role: Role) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        if let Some(ticket) = self.pending_hide.take() {
            commands.push(TimerCommand::Cancel(ticket));
        }
        if let Some(ticket) = self.pending_focus.take() {
            commands.push(TimerCommand::Cancel(ticket));
        }

        self.state = OverlayState::Open {
            role,
            stage: Stage::Editing,
        };
        self.presence = Presence::Visible;
        self.last_role = Some(role);
        self.focused = None;

        let deferred = self.arm(DeferredAction::FocusFirstField, self.timings.focus_delay());
        self.pending_focus = Some(deferred.ticket);
        commands.push(TimerCommand::Schedule(deferred));

        tracing::debug!(role = %role, "signup overlay opened");
        commands
    }

    /// Closes the overlay and resets the form. No-op when already closed.
    pub fn close(&mut self) -> Vec<TimerCommand> {
        if self.state == OverlayState::Closed {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some(ticket) = self.pending_focus.take() {
            commands.push(TimerCommand::Cancel(ticket));
        }
        if let Some(ticket) = self.pending_hide.take() {
            commands.push(TimerCommand::Cancel(ticket));
        }

        self.state = OverlayState::Closed;
        self.presence = Presence::Closing;
        self.focused = None;
        self.form.reset();
        self.clear_errors();

        let deferred = self.arm(DeferredAction::HideOverlay, self.timings.hide_delay());
        self.pending_hide = Some(deferred.ticket);
        commands.push(TimerCommand::Schedule(deferred));

        tracing::debug!("signup overlay closed");
        commands
    }

    /// Re-opens the overlay for the other role, keeping entered values.
    ///
    /// No-op when closed or while the success view is shown.
    pub fn switch_role(&mut self) -> Vec<TimerCommand> {
        match self.state {
            OverlayState::Open {
                role,
                stage: Stage::Editing,
            } => self.open(role.other()),
            _ => Vec::new(),
        }
    }

    /// Closes the overlay from the success view.
    pub fn acknowledge(&mut self) -> Vec<TimerCommand> {
        if matches!(self.stage(), Some(Stage::Submitted(_))) {
            self.close()
        } else {
            Vec::new()
        }
    }

    /// Runs a deferred continuation if its ticket is still current.
    ///
    /// Returns the action that ran, or `None` for a stale ticket.
    pub fn fire(&mut self, ticket: Ticket) -> Option<DeferredAction> {
        if self.pending_focus == Some(ticket) {
            self.pending_focus = None;
            if self.is_editing() {
                self.focused = self.visible_fields().first().copied();
            }
            return Some(DeferredAction::FocusFirstField);
        }

        if self.pending_hide == Some(ticket) {
            self.pending_hide = None;
            if self.state == OverlayState::Closed {
                self.presence = Presence::Hidden;
                self.last_role = None;
            }
            return Some(DeferredAction::HideOverlay);
        }

        tracing::trace!(ticket = ticket.0, "ignoring stale overlay timer");
        None
    }

    fn arm(&mut self, action: DeferredAction, delay: Duration) -> Deferred {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        Deferred {
            ticket,
            action,
            delay,
        }
    }

    // ========================================================================
    // Fields
    // ========================================================================

    /// Checks `value` against the rule for `field` using the current form.
    pub fn validate_field(&self, field: Field, value: &str) -> ValidationResult {
        validation::validate_field(field, value, &self.form)
    }

    /// Stores an edited value and validates it immediately.
    ///
    /// Returns `None` (and stores nothing) unless the form is being edited.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Option<ValidationResult> {
        if !self.is_editing() {
            return None;
        }

        let value = value.into();
        let result = self.validate_field(field, &value);
        self.form.set(field, value);
        self.errors[field] = result.error();
        Some(result)
    }

    /// Validates the fields relevant to the current role and either shows
    /// every failure or moves to the success view.
    pub fn submit(&mut self) -> SubmitOutcome {
        let OverlayState::Open {
            role,
            stage: Stage::Editing,
        } = self.state
        else {
            return SubmitOutcome::Ignored;
        };

        self.clear_errors();
        match validation::validate_submission(&self.form, role) {
            Err(errors) => {
                for (field, error) in &errors {
                    self.errors[*field] = Some(*error);
                }
                tracing::debug!(
                    role = %role,
                    invalid = errors.len(),
                    "signup submission rejected"
                );
                SubmitOutcome::Rejected {
                    errors,
                    cue: RejectionCue {
                        duration: self.timings.shake(),
                    },
                }
            }
            Ok(()) => {
                let registration = Registration {
                    role,
                    name: self.form.get(Field::Name).trim().to_string(),
                    email: self.form.get(Field::Email).to_string(),
                };
                self.form.reset();
                self.focused = None;
                self.state = OverlayState::Open {
                    role,
                    stage: Stage::Submitted(registration.clone()),
                };
                tracing::info!(role = %role, "signup submission accepted");
                SubmitOutcome::Accepted(registration)
            }
        }
    }

    fn clear_errors(&mut self) {
        for error in self.errors.values_mut() {
            *error = None;
        }
    }

    // ========================================================================
    // Focus
    // ========================================================================

    /// Focuses `field` if it is presented for the current role.
    pub fn focus(&mut self, field: Field) -> bool {
        if self.is_editing() && self.is_field_visible(field) {
            self.focused = Some(field);
            true
        } else {
            false
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        if !self.is_editing() {
            return;
        }
        let fields = self.visible_fields();
        if fields.is_empty() {
            return;
        }
        let len = fields.len();
        let current = self
            .focused
            .and_then(|field| fields.iter().position(|f| *f == field));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.focused = Some(fields[next]);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self.state,
            OverlayState::Open {
                stage: Stage::Editing,
                ..
            }
        )
    }

    /// Current role; `None` when closed.
    pub fn role(&self) -> Option<Role> {
        match self.state {
            OverlayState::Open { role, .. } => Some(role),
            OverlayState::Closed => None,
        }
    }

    /// Role to draw: the current one, or the last one while closing.
    pub fn display_role(&self) -> Option<Role> {
        match self.presence {
            Presence::Hidden => None,
            Presence::Visible | Presence::Closing => self.role().or(self.last_role),
        }
    }

    pub fn stage(&self) -> Option<&Stage> {
        match &self.state {
            OverlayState::Open { stage, .. } => Some(stage),
            OverlayState::Closed => None,
        }
    }

    pub fn copy_for(&self, role: Role) -> &RoleCopy {
        &self.copy[role]
    }

    /// Copy for the displayed role.
    pub fn copy(&self) -> Option<&RoleCopy> {
        self.display_role().map(|role| self.copy_for(role))
    }

    /// Fields presented for the current role; empty when closed.
    pub fn visible_fields(&self) -> Vec<Field> {
        self.role().map(Field::visible_for).unwrap_or_default()
    }

    pub fn is_field_visible(&self, field: Field) -> bool {
        self.role().is_some_and(|role| field.is_visible_for(role))
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field]
    }

    /// The "invalid" marker on a field's container.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.errors[field].is_some()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(commands: &[TimerCommand]) -> Vec<Deferred> {
        commands
            .iter()
            .filter_map(|command| match command {
                TimerCommand::Schedule(deferred) => Some(*deferred),
                TimerCommand::Cancel(_) => None,
            })
            .collect()
    }

    fn fire_scheduled(controller: &mut SignupOverlayController, commands: &[TimerCommand]) {
        for deferred in scheduled(commands) {
            controller.fire(deferred.ticket);
        }
    }

    fn fill_valid(controller: &mut SignupOverlayController) {
        controller.input(Field::Name, "Ada Lovelace");
        controller.input(Field::Email, "ada@example.com");
        controller.input(Field::Password, "analytical");
        controller.input(Field::ConfirmPassword, "analytical");
        controller.input(Field::Age, "36");
    }

    #[test]
    fn test_initial_state_closed() {
        let controller = SignupOverlayController::default();
        assert_eq!(controller.state(), &OverlayState::Closed);
        assert_eq!(controller.presence(), Presence::Hidden);
        assert_eq!(controller.role(), None);
        assert!(controller.visible_fields().is_empty());
    }

    #[test]
    fn test_open_sets_role_fields_and_copy() {
        for &role in Role::all() {
            let mut controller = SignupOverlayController::default();
            controller.open(role);

            assert_eq!(controller.role(), Some(role));
            assert_eq!(controller.presence(), Presence::Visible);
            assert_eq!(controller.visible_fields(), Field::visible_for(role));
            assert_eq!(controller.copy(), Some(&RoleCopy::default_for(role)));

            let other_extras: Vec<Field> = Field::ALL
                .into_iter()
                .filter(|f| f.is_visible_for(role.other()) && !f.is_visible_for(role))
                .collect();
            assert!(!other_extras.is_empty());
            for field in other_extras {
                assert!(!controller.is_field_visible(field));
            }
        }
    }

    #[test]
    fn test_open_schedules_focus_on_first_field() {
        let mut controller = SignupOverlayController::default();
        let commands = controller.open(Role::Teacher);

        let deferred = scheduled(&commands);
        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].action, DeferredAction::FocusFirstField);
        assert_eq!(deferred[0].delay, Duration::from_millis(220));
        assert_eq!(controller.focused(), None);

        assert_eq!(
            controller.fire(deferred[0].ticket),
            Some(DeferredAction::FocusFirstField)
        );
        assert_eq!(controller.focused(), Some(Field::Name));
    }

    #[test]
    fn test_close_resets_everything() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Teacher);
        controller.input(Field::Name, "Al");
        controller.input(Field::Bio, "short");
        assert!(controller.is_invalid(Field::Name));

        let commands = controller.close();
        assert_eq!(controller.state(), &OverlayState::Closed);
        assert_eq!(controller.role(), None);
        assert!(controller.form().is_empty());
        for field in Field::ALL {
            assert_eq!(controller.error(field), None);
            assert!(!controller.is_invalid(field));
        }

        assert_eq!(controller.presence(), Presence::Closing);
        assert_eq!(controller.display_role(), Some(Role::Teacher));
        let deferred = scheduled(&commands);
        assert_eq!(deferred[0].action, DeferredAction::HideOverlay);
        controller.fire(deferred[0].ticket);
        assert_eq!(controller.presence(), Presence::Hidden);
        assert_eq!(controller.display_role(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = SignupOverlayController::default();
        assert!(controller.close().is_empty());

        controller.open(Role::Student);
        let first = controller.close();
        assert!(!first.is_empty());
        assert!(controller.close().is_empty());
        assert_eq!(controller.presence(), Presence::Closing);
    }

    #[test]
    fn test_switch_role_after_close_is_noop() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        controller.close();

        assert!(controller.switch_role().is_empty());
        assert_eq!(controller.role(), None);
        assert_eq!(controller.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_switch_role_round_trip() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        let fields = controller.visible_fields();
        let copy = controller.copy().cloned();

        controller.switch_role();
        assert_eq!(controller.role(), Some(Role::Teacher));
        assert_eq!(controller.visible_fields(), Field::visible_for(Role::Teacher));

        controller.switch_role();
        assert_eq!(controller.role(), Some(Role::Student));
        assert_eq!(controller.visible_fields(), fields);
        assert_eq!(controller.copy().cloned(), copy);
    }

    #[test]
    fn test_switch_role_keeps_values() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        controller.input(Field::Email, "kid@school.org");
        controller.switch_role();
        assert_eq!(controller.value(Field::Email), "kid@school.org");
    }

    #[test]
    fn test_switch_role_cancels_pending_focus() {
        let mut controller = SignupOverlayController::default();
        let first = scheduled(&controller.open(Role::Student));
        let commands = controller.switch_role();

        assert!(commands.contains(&TimerCommand::Cancel(first[0].ticket)));
        assert_eq!(controller.fire(first[0].ticket), None);
        assert_eq!(controller.focused(), None);
    }

    #[test]
    fn test_input_validates_immediately() {
        let mut controller = SignupOverlayController::default();
        assert_eq!(controller.input(Field::Name, "Ada"), None);

        controller.open(Role::Student);
        assert_eq!(
            controller.input(Field::Email, "bad"),
            Some(ValidationResult::Invalid(FieldError::InvalidEmail))
        );
        assert!(controller.is_invalid(Field::Email));
        assert_eq!(controller.error(Field::Email), Some(FieldError::InvalidEmail));

        assert_eq!(
            controller.input(Field::Email, "a@b.co"),
            Some(ValidationResult::Valid)
        );
        assert!(!controller.is_invalid(Field::Email));
    }

    #[test]
    fn test_confirm_password_uses_current_password() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        controller.input(Field::Password, "hunter2hunter2");

        assert!(
            controller
                .validate_field(Field::ConfirmPassword, "hunter2hunter2")
                .is_valid()
        );
        assert!(
            !controller
                .validate_field(Field::ConfirmPassword, "hunter2")
                .is_valid()
        );
    }

    #[test]
    fn test_submit_rejects_with_all_errors_and_keeps_values() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Teacher);
        controller.input(Field::Name, "Al");
        controller.input(Field::Email, "nope");

        let SubmitOutcome::Rejected { errors, cue } = controller.submit() else {
            panic!("expected rejection");
        };
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Password,
                Field::Age,
                Field::Specialty,
                Field::Bio
            ]
        );
        assert_eq!(cue.duration, Duration::from_millis(380));
        for field in fields {
            assert!(controller.is_invalid(field));
        }
        assert_eq!(controller.value(Field::Name), "Al");
        assert_eq!(controller.value(Field::Email), "nope");
        assert!(controller.is_editing());
    }

    #[test]
    fn test_submit_teacher_bio_boundary() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Teacher);
        fill_valid(&mut controller);
        controller.input(Field::Specialty, "Mathematics");
        controller.input(Field::Bio, "b".repeat(19));

        let outcome = controller.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                errors: vec![(Field::Bio, FieldError::BioTooShort)],
                cue: RejectionCue {
                    duration: Duration::from_millis(380)
                },
            }
        );

        controller.input(Field::Bio, "b".repeat(20));
        let SubmitOutcome::Accepted(registration) = controller.submit() else {
            panic!("expected acceptance");
        };
        assert_eq!(registration.role, Role::Teacher);
        assert_eq!(registration.name, "Ada Lovelace");
    }

    #[test]
    fn test_submit_clears_previous_errors_of_valid_fields() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        controller.input(Field::Name, "Al");
        controller.submit();
        assert!(controller.is_invalid(Field::Name));

        fill_valid(&mut controller);
        controller.input(Field::Age, "9");
        let SubmitOutcome::Rejected { errors, .. } = controller.submit() else {
            panic!("expected rejection");
        };
        assert_eq!(errors, vec![(Field::Age, FieldError::AgeOutOfRange)]);
        assert!(!controller.is_invalid(Field::Name));
    }

    #[test]
    fn test_successful_submit_shows_success_then_acknowledge_closes() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        fill_valid(&mut controller);

        let SubmitOutcome::Accepted(registration) = controller.submit() else {
            panic!("expected acceptance");
        };
        assert!(registration.message().contains("as a Student"));
        assert_eq!(
            controller.stage(),
            Some(&Stage::Submitted(registration.clone()))
        );
        assert!(controller.form().is_empty());

        assert_eq!(controller.submit(), SubmitOutcome::Ignored);
        assert!(controller.switch_role().is_empty());
        assert_eq!(controller.input(Field::Name, "late"), None);

        controller.acknowledge();
        assert_eq!(controller.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_reopen_after_success_starts_editing() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        fill_valid(&mut controller);
        controller.submit();
        controller.acknowledge();

        controller.open(Role::Teacher);
        assert_eq!(controller.stage(), Some(&Stage::Editing));
        assert!(controller.form().is_empty());
    }

    #[test]
    fn test_stale_hide_does_not_hide_reopened_overlay() {
        let mut controller = SignupOverlayController::default();
        controller.open(Role::Student);
        let hide = scheduled(&controller.close());
        let commands = controller.open(Role::Teacher);

        assert!(commands.contains(&TimerCommand::Cancel(hide[0].ticket)));
        assert_eq!(controller.fire(hide[0].ticket), None);
        assert_eq!(controller.presence(), Presence::Visible);
        assert_eq!(controller.role(), Some(Role::Teacher));
    }

    #[test]
    fn test_focus_cycles_over_visible_fields() {
        let mut controller = SignupOverlayController::default();
        let commands = controller.open(Role::Student);
        fire_scheduled(&mut controller, &commands);
        assert_eq!(controller.focused(), Some(Field::Name));

        controller.focus_prev();
        assert_eq!(controller.focused(), Some(Field::StudyLevel));
        controller.focus_next();
        assert_eq!(controller.focused(), Some(Field::Name));

        assert!(!controller.focus(Field::Bio));
        assert!(controller.focus(Field::Age));
        controller.focus_next();
        assert_eq!(controller.focused(), Some(Field::StudyLevel));
    }
}
