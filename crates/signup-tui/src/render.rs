//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use signup_core::{Presence, Role};

use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, LandingState};

const BUTTON_WIDTH: u16 = 22;
const BUTTON_HEIGHT: u16 = 3;

/// Label of the landing button that opens the overlay for `role`.
pub fn button_label(role: Role) -> &'static str {
    match role {
        Role::Student => "I'm a student",
        Role::Teacher => "I'm a teacher",
    }
}

/// Renders the entire screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Renders with an explicit clock (animations read `now`).
pub fn render_at(app: &AppState, frame: &mut Frame, now: Instant) {
    let area = frame.area();
    let dimmed = app.overlay.controller().presence() != Presence::Hidden;

    render_landing(frame, area, &app.landing, dimmed);

    if dimmed {
        app.overlay.render(frame, area, now);
    }
}

/// Areas of the two entry buttons, student first.
pub fn button_areas(area: Rect) -> [Rect; 2] {
    let [row] = Layout::vertical([Constraint::Length(BUTTON_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(4)
    .areas(row)
}

fn render_landing(frame: &mut Frame, area: Rect, landing: &LandingState, dimmed: bool) {
    let title_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let [student_button, teacher_button] = button_areas(area);

    let title_y = student_button.y.saturating_sub(3);
    if title_y >= area.y && area.height > 0 {
        let title = Paragraph::new(Line::from(Span::styled("Join the platform", title_style)))
            .alignment(Alignment::Center);
        frame.render_widget(title, Rect::new(area.x, title_y, area.width, 1));
    }

    for (role, button) in [
        (Role::Student, student_button),
        (Role::Teacher, teacher_button),
    ] {
        render_button(frame, button, role, landing.selected == role && !dimmed);
    }

    if !dimmed {
        let hints = [
            InputHint::new("←/→", "select"),
            InputHint::new("Enter", "sign up"),
            InputHint::new("q", "quit"),
        ];
        render_hints(frame, area, &hints, Color::Cyan);
    }
}

fn render_button(frame: &mut Frame, area: Rect, role: Role, selected: bool) {
    let color = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let label_style = if selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Paragraph::new(Line::from(Span::styled(button_label(role), label_style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
