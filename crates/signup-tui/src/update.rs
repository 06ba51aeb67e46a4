//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use signup_core::Role;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render::button_areas;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.overlay.on_tick(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TimerFired(ticket) => {
            app.overlay.on_timer(ticket);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            app.overlay.handle_paste(&text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if app.overlay.is_active() {
        return app.overlay.handle_key(key);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![UiEffect::Quit],
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.landing.toggle();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => open(app, app.landing.selected),
        KeyCode::Char('s') => open(app, Role::Student),
        KeyCode::Char('t') => open(app, Role::Teacher),
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    if app.overlay.is_active() {
        return app.overlay.handle_click(app.viewport, mouse.column, mouse.row);
    }

    let position = Position::new(mouse.column, mouse.row);
    let [student, teacher] = button_areas(app.viewport);
    if student.contains(position) {
        open(app, Role::Student)
    } else if teacher.contains(position) {
        open(app, Role::Teacher)
    } else {
        vec![]
    }
}

fn open(app: &mut AppState, role: Role) -> Vec<UiEffect> {
    app.landing.selected = role;
    app.overlay.open(role)
}
