use std::collections::HashMap;

use signup_core::Ticket;
use tokio_util::sync::CancellationToken;

/// Cancellation handles of armed overlay timers, keyed by ticket.
///
/// Owned by the runtime; the reducer only requests arming/cancelling via
/// effects.
#[derive(Debug, Default)]
pub struct TimerTable {
    armed: HashMap<Ticket, CancellationToken>,
}

impl TimerTable {
    /// Registers a timer and returns the token its task should watch.
    pub fn arm(&mut self, ticket: Ticket) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.armed.insert(ticket, token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Cancels an armed timer. Returns false if it already fired or was unknown.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        match self.armed.remove(&ticket) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Forgets a timer that fired.
    pub fn finish(&mut self, ticket: Ticket) {
        self.armed.remove(&ticket);
    }

    pub fn is_any_armed(&self) -> bool {
        !self.armed.is_empty()
    }

    /// Cancels everything (used on shutdown).
    pub fn cancel_all(&mut self) {
        for (_, token) in self.armed.drain() {
            token.cancel();
        }
    }
}
