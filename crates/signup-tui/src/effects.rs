//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state; arming and cancelling timers (the only
//! asynchronous work here) happens in the runtime.

use signup_core::{Deferred, Ticket, TimerCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Arm a timer that posts `UiEvent::TimerFired` when it elapses.
    ArmTimer(Deferred),

    /// Cancel a previously armed timer.
    CancelTimer(Ticket),
}

impl From<TimerCommand> for UiEffect {
    fn from(command: TimerCommand) -> Self {
        match command {
            TimerCommand::Schedule(deferred) => UiEffect::ArmTimer(deferred),
            TimerCommand::Cancel(ticket) => UiEffect::CancelTimer(ticket),
        }
    }
}

/// Converts controller timer commands into runtime effects.
pub fn timer_effects(commands: Vec<TimerCommand>) -> Vec<UiEffect> {
    commands.into_iter().map(UiEffect::from).collect()
}
