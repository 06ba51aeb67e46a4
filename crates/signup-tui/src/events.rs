//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! frame ticks and deferred overlay timers posted back through the inbox.

use crossterm::event::Event;
use signup_core::Ticket;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic tick (drives animations).
    Tick,

    /// Current terminal size, emitted before each batch of events.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(Event),

    /// A deferred overlay continuation elapsed.
    TimerFired(Ticket),
}
