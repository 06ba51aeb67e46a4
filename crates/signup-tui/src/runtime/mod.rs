//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer mutates state and returns
//! effects; this module arms timers and draws frames.
//!
//! ## Inbox Pattern
//!
//! Timer tasks run on tokio and post `UiEvent::TimerFired` to `inbox_tx`.
//! The runtime drains `inbox_rx` each frame alongside terminal input, so
//! deferred continuations run on the UI thread like any other event.

mod inbox;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use signup_core::config::Config;
use signup_core::{Deferred, Role};
use tokio_util::sync::CancellationToken;

use crate::common::TimerTable;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::TerminalSession;
use crate::{render, update};

/// Frame cadence while something is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when nothing moves on screen.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
pub struct TuiRuntime {
    session: TerminalSession,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    timers: TimerTable,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: &Config) -> Result<Self> {
        let session = TerminalSession::enter()?;
        let (inbox_tx, inbox_rx) = inbox::channel();

        Ok(Self {
            session,
            state: AppState::new(config),
            inbox_tx,
            inbox_rx,
            timers: TimerTable::default(),
            last_tick: Instant::now(),
        })
    }

    /// Opens the overlay before the first frame.
    pub fn open_overlay(&mut self, role: Role) {
        self.state.landing.selected = role;
        let effects = self.state.overlay.open(role);
        self.execute_effects(effects);
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("signup screen started");
        let result = self.event_loop();
        self.timers.cancel_all();
        tracing::info!("signup screen stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            let size = self.session.terminal_mut().size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if !matches!(event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                let state = &self.state;
                self.session
                    .terminal_mut()
                    .draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let interval = tick_interval(
            self.state.overlay.is_animating(),
            self.timers.is_any_armed(),
        );

        self.collect_inbox_events(&mut events);

        // Block until the next tick only when nothing is queued.
        let poll_duration = if events.is_empty() {
            interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            if let UiEvent::TimerFired(ticket) = &ev {
                self.timers.finish(*ticket);
            }
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::ArmTimer(deferred) => {
                tracing::trace!(
                    ticket = deferred.ticket.0,
                    action = ?deferred.action,
                    delay_ms = deferred.delay.as_millis() as u64,
                    "arming timer"
                );
                let token = self.timers.arm(deferred.ticket);
                spawn_timer(self.inbox_tx.clone(), deferred, token);
            }
            UiEffect::CancelTimer(ticket) => {
                if !self.timers.cancel(ticket) {
                    tracing::trace!(ticket = ticket.0, "timer already fired");
                }
            }
        }
    }
}

/// Poll cadence: fast while animating or while a timer is pending, since
/// timer results sit in the inbox until the next poll returns.
fn tick_interval(animating: bool, timers_armed: bool) -> Duration {
    if animating || timers_armed {
        FRAME_DURATION
    } else {
        IDLE_POLL_DURATION
    }
}

/// Posts `TimerFired` after `deferred.delay` unless `cancel` fires first.
fn spawn_timer(tx: UiEventSender, deferred: Deferred, cancel: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            () = tokio::time::sleep(deferred.delay) => {
                let _ = tx.send(UiEvent::TimerFired(deferred.ticket));
            }
            () = cancel.cancelled() => {
                tracing::trace!(ticket = deferred.ticket.0, "timer cancelled");
            }
        }
    });
}
