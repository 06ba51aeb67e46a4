//! Signup overlay: role-specific registration form drawn over the landing page.
//!
//! Wraps a `SignupOverlayController` with the terminal-only pieces: key and
//! mouse mapping, the rejection shake animation, and rendering.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use signup_core::config::Config;
use signup_core::{
    Field, InputKind, Presence, Registration, Role, RoleCopy, SignupOverlayController, Stage,
    SubmitOutcome, Ticket,
};

use super::render_utils::{
    InputHint, InputLine, calculate_overlay_area, inner_area, offset_x, render_hints,
    render_input_line, render_overlay_container, render_separator,
};
use crate::common::{mask_secret, pop_grapheme, truncate_with_ellipsis};
use crate::effects::{UiEffect, timer_effects};

const OVERLAY_WIDTH: u16 = 80;
const OVERLAY_HEIGHT: u16 = 24;
const IMAGE_PANEL_WIDTH: u16 = 24;
const LABEL_WIDTH: u16 = 18;
/// Peak horizontal displacement of the rejection shake, in columns.
const SHAKE_AMPLITUDE: f32 = 2.0;
const CLOSE_LABEL: &str = "[x]";
const HOME_LABEL: &str = "[ Go to Home Page ]";

/// Screen area of the overlay for a given viewport.
pub fn overlay_area(viewport: Rect) -> Rect {
    calculate_overlay_area(viewport, OVERLAY_WIDTH, OVERLAY_HEIGHT)
}

/// Regions of the overlay, shared by rendering and click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OverlayLayout {
    popup: Rect,
    image: Rect,
    form: Rect,
    /// Close marker on the top border.
    close_button: Rect,
    /// "Go to Home Page" action of the success view.
    home_button: Rect,
}

impl OverlayLayout {
    fn new(popup: Rect) -> Self {
        let [image, form] =
            Layout::horizontal([Constraint::Length(IMAGE_PANEL_WIDTH), Constraint::Min(0)])
                .areas(inner_area(popup));
        let form = Rect::new(form.x + 1, form.y, form.width.saturating_sub(2), form.height);

        let close_width = (CLOSE_LABEL.len() as u16).min(popup.width);
        let close_button = Rect::new(
            popup.right().saturating_sub(close_width + 2).max(popup.x),
            popup.y,
            close_width,
            1,
        );

        let home_width = (HOME_LABEL.len() as u16).min(form.width);
        let home_button = Rect::new(
            form.x + (form.width - home_width) / 2,
            form.bottom().saturating_sub(4).max(form.y),
            home_width,
            1,
        );

        Self {
            popup,
            image,
            form,
            close_button,
            home_button,
        }
    }

    /// Row of the `index`-th visible field, if it fits above the bottom edge.
    fn field_row(&self, index: usize) -> Option<Rect> {
        let y = self.form.y + 2 + 2 * index as u16;
        (y + 1 < self.form.bottom()).then(|| Rect::new(self.form.x, y, self.form.width, 1))
    }

    /// The switch-role line, unless `field_count` fields reach down to it.
    fn switch_line(&self, field_count: usize) -> Option<Rect> {
        let separator_y = self.form.bottom().saturating_sub(3);
        let fields_end = self.form.y + 2 + 2 * field_count as u16;
        (separator_y > fields_end)
            .then(|| Rect::new(self.form.x, separator_y + 1, self.form.width, 1))
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Student => Color::Cyan,
        Role::Teacher => Color::Magenta,
    }
}

/// Horizontal offset of the shake: 0 → -amplitude → 0 over `duration`.
pub fn shake_offset(elapsed: Duration, duration: Duration) -> i16 {
    if duration.is_zero() || elapsed >= duration {
        return 0;
    }
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    let triangle = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    -((triangle * SHAKE_AMPLITUDE).round() as i16)
}

#[derive(Debug, Clone, Copy)]
struct Shake {
    started: Instant,
    duration: Duration,
}

impl Shake {
    fn offset_at(self, now: Instant) -> i16 {
        shake_offset(now.saturating_duration_since(self.started), self.duration)
    }

    fn is_done(self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Returns true for characters a numeric input accepts.
fn accepts_char(kind: InputKind, c: char) -> bool {
    match kind {
        InputKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        _ => !c.is_control(),
    }
}

#[derive(Debug)]
pub struct SignupOverlay {
    controller: SignupOverlayController,
    shake: Option<Shake>,
}

impl SignupOverlay {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: SignupOverlayController::new(config),
            shake: None,
        }
    }

    pub fn controller(&self) -> &SignupOverlayController {
        &self.controller
    }

    /// Opens the overlay for `role`.
    pub fn open(&mut self, role: Role) -> Vec<UiEffect> {
        self.shake = None;
        timer_effects(self.controller.open(role))
    }

    pub fn close(&mut self) -> Vec<UiEffect> {
        self.shake = None;
        timer_effects(self.controller.close())
    }

    /// True while the overlay accepts input.
    pub fn is_active(&self) -> bool {
        self.controller.is_open()
    }

    /// True while something is moving on screen.
    pub fn is_animating(&self) -> bool {
        self.shake.is_some() || self.controller.presence() == Presence::Closing
    }

    pub fn on_timer(&mut self, ticket: Ticket) {
        self.controller.fire(ticket);
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.shake.is_some_and(|shake| shake.is_done(now)) {
            self.shake = None;
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<UiEffect> {
        if self.controller.is_editing() {
            return self.handle_editing_key(key);
        }
        if !self.controller.is_open() {
            return vec![];
        }

        // Success view: a single "Go to Home Page" action.
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                timer_effects(self.controller.acknowledge())
            }
            _ if ctrl_c => timer_effects(self.controller.acknowledge()),
            _ => vec![],
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Vec<UiEffect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Char('c') if ctrl => self.close(),
            KeyCode::Char('r') if ctrl => timer_effects(self.controller.switch_role()),
            KeyCode::Tab | KeyCode::Down => {
                self.controller.focus_next();
                vec![]
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.controller.focus_prev();
                vec![]
            }
            KeyCode::Enter => {
                self.submit(Instant::now());
                vec![]
            }
            KeyCode::Backspace => {
                self.edit(pop_grapheme);
                vec![]
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert(&c.to_string());
                vec![]
            }
            _ => vec![],
        }
    }

    /// Inserts pasted text into the focused field (newlines dropped).
    pub fn handle_paste(&mut self, text: &str) {
        if self.controller.is_editing() {
            let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            self.insert(&flat);
        }
    }

    /// Maps a left click to the control under it.
    ///
    /// Outside the overlay or on the close marker closes it. While editing,
    /// the switch line switches role and a field row focuses that field. On
    /// the success view the home button acknowledges.
    pub fn handle_click(&mut self, viewport: Rect, column: u16, row: u16) -> Vec<UiEffect> {
        if !self.is_active() {
            return vec![];
        }

        let layout = OverlayLayout::new(overlay_area(viewport));
        let position = Position::new(column, row);
        if !layout.popup.contains(position) || layout.close_button.contains(position) {
            return self.close();
        }

        if !self.controller.is_editing() {
            if layout.home_button.contains(position) {
                return timer_effects(self.controller.acknowledge());
            }
            return vec![];
        }

        let fields = self.controller.visible_fields();
        if layout
            .switch_line(fields.len())
            .is_some_and(|line| line.contains(position))
        {
            return timer_effects(self.controller.switch_role());
        }
        if let Some(field) = fields.into_iter().enumerate().find_map(|(i, field)| {
            layout
                .field_row(i)
                .is_some_and(|row| row.contains(position))
                .then_some(field)
        }) {
            self.controller.focus(field);
        }
        vec![]
    }

    fn submit(&mut self, now: Instant) {
        if let SubmitOutcome::Rejected { cue, .. } = self.controller.submit() {
            self.shake = Some(Shake {
                started: now,
                duration: cue.duration,
            });
        }
    }

    fn insert(&mut self, text: &str) {
        let Some(field) = self.controller.focused() else {
            return;
        };
        let kind = field.input_kind();
        let accepted: String = text.chars().filter(|c| accepts_char(kind, *c)).collect();
        if accepted.is_empty() {
            return;
        }
        self.edit(|value| {
            value.push_str(&accepted);
            true
        });
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String) -> bool) {
        let Some(field) = self.controller.focused() else {
            return;
        };
        let mut value = self.controller.value(field).to_string();
        if apply(&mut value) {
            self.controller.input(field, value);
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&self, frame: &mut Frame, viewport: Rect, now: Instant) {
        let Some(role) = self.controller.display_role() else {
            return;
        };
        let copy = self.controller.copy_for(role);
        let accent = if self.controller.presence() == Presence::Closing {
            Color::DarkGray
        } else {
            role_color(role)
        };

        let mut popup = overlay_area(viewport);
        if let Some(shake) = self.shake {
            popup = offset_x(popup, shake.offset_at(now), viewport);
        }
        render_overlay_container(frame, popup, &copy.title, accent);

        let layout = OverlayLayout::new(popup);
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(accent))),
            layout.close_button,
        );
        render_image_panel(frame, layout.image, copy, accent);

        match self.controller.stage() {
            Some(Stage::Submitted(registration)) => {
                render_success(frame, &layout, registration, accent);
            }
            _ => self.render_form(frame, &layout, role, copy, accent),
        }
    }

    fn render_form(
        &self,
        frame: &mut Frame,
        layout: &OverlayLayout,
        role: Role,
        copy: &RoleCopy,
        accent: Color,
    ) {
        let area = layout.form;
        let subtitle = Paragraph::new(Line::from(Span::styled(
            copy.subtitle.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(subtitle, Rect::new(area.x, area.y, area.width, 1));
        render_separator(frame, area, 1);

        let fields = Field::visible_for(role);
        for (i, field) in fields.iter().copied().enumerate() {
            let Some(row) = layout.field_row(i) else {
                break;
            };
            let raw = self.controller.value(field);
            let shown = if field.input_kind() == InputKind::Secret {
                mask_secret(raw)
            } else {
                raw.to_string()
            };
            render_input_line(
                frame,
                row,
                &InputLine {
                    label: field.label(),
                    label_width: LABEL_WIDTH,
                    value: &shown,
                    placeholder: field.placeholder(),
                    focused: self.controller.focused() == Some(field),
                    invalid: self.controller.is_invalid(field),
                    accent,
                },
            );
            if let Some(error) = self.controller.error(field) {
                let error_line = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(error.message(), Style::default().fg(Color::Red)),
                ]);
                frame.render_widget(
                    Paragraph::new(error_line),
                    Rect::new(row.x, row.y + 1, row.width, 1),
                );
            }
        }

        if let Some(switch_area) = layout.switch_line(fields.len()) {
            render_separator(frame, area, switch_area.y - 1 - area.y);
            let switch_line = Line::from(vec![
                Span::styled("Ctrl+R ", Style::default().fg(accent)),
                Span::styled(
                    copy.switch_text.as_str(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]);
            frame.render_widget(Paragraph::new(switch_line), switch_area);
        }

        let hints = [
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "create account"),
            InputHint::new("Esc", "close"),
        ];
        render_hints(frame, area, &hints, accent);
    }
}

fn render_image_panel(frame: &mut Frame, area: Rect, copy: &RoleCopy, accent: Color) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let art_style = Style::default().fg(accent);
    let mut lines = vec![Line::default(); (inner.height / 3) as usize];
    lines.push(Line::from(Span::styled("▞▚▞▚▞▚▞▚▞▚", art_style)));
    lines.push(Line::from(Span::styled("▚▞▚▞▚▞▚▞▚▞", art_style)));
    lines.push(Line::from(Span::styled("▞▚▞▚▞▚▞▚▞▚", art_style)));
    if !copy.label.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&copy.label, inner.width as usize),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );

    if inner.height > 0 {
        let image = Paragraph::new(Line::from(Span::styled(
            truncate_with_ellipsis(&copy.image, inner.width as usize),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(
            image,
            Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
        );
    }
}

fn render_success(
    frame: &mut Frame,
    layout: &OverlayLayout,
    registration: &Registration,
    accent: Color,
) {
    let area = layout.form;
    let message_area = Rect::new(
        area.x,
        area.y,
        area.width,
        layout.home_button.y.saturating_sub(area.y + 1),
    );
    let top = message_area.height / 4;
    let mut lines = vec![Line::default(); top as usize];
    lines.push(Line::from(Span::styled(
        "✔",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        registration.headline(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        registration.message(),
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            HOME_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )),
        layout.home_button,
    );

    render_hints(frame, area, &[InputHint::new("Enter", "go to home page")], accent);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use signup_core::{DeferredAction, FieldError};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(overlay: &mut SignupOverlay, text: &str) {
        for c in text.chars() {
            overlay.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Opens the overlay and fires the focus timer.
    fn opened(role: Role) -> SignupOverlay {
        let mut overlay = SignupOverlay::new(&Config::default());
        for effect in overlay.open(role) {
            if let UiEffect::ArmTimer(deferred) = effect {
                assert_eq!(deferred.action, DeferredAction::FocusFirstField);
                overlay.on_timer(deferred.ticket);
            }
        }
        overlay
    }

    fn render_to_string(overlay: &SignupOverlay, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| overlay.render(frame, frame.area(), Instant::now()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_shake_offset_peaks_midway() {
        let duration = Duration::from_millis(400);
        assert_eq!(shake_offset(Duration::ZERO, duration), 0);
        assert_eq!(shake_offset(Duration::from_millis(200), duration), -2);
        assert_eq!(shake_offset(duration, duration), 0);
        assert_eq!(shake_offset(Duration::from_millis(10), Duration::ZERO), 0);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut overlay = opened(Role::Student);
        type_text(&mut overlay, "Adx");
        overlay.handle_key(key(KeyCode::Backspace));
        type_text(&mut overlay, "a");
        assert_eq!(overlay.controller().value(Field::Name), "Ada");
        assert!(!overlay.controller().is_invalid(Field::Name));

        overlay.handle_key(key(KeyCode::Tab));
        type_text(&mut overlay, "bad");
        assert_eq!(
            overlay.controller().error(Field::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_age_accepts_only_numeric_chars() {
        let mut overlay = opened(Role::Student);
        overlay.controller.focus(Field::Age);
        type_text(&mut overlay, "1x4");
        assert_eq!(overlay.controller().value(Field::Age), "14");
    }

    #[test]
    fn test_enter_with_invalid_fields_starts_shake() {
        let mut overlay = opened(Role::Teacher);
        overlay.handle_key(key(KeyCode::Enter));

        assert!(overlay.is_animating());
        assert!(overlay.controller().is_invalid(Field::Bio));
        assert!(overlay.controller().is_editing());

        overlay.on_tick(Instant::now() + Duration::from_secs(1));
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_ctrl_r_switches_role() {
        let mut overlay = opened(Role::Student);
        let effects = overlay.handle_key(ctrl('r'));
        assert_eq!(overlay.controller().role(), Some(Role::Teacher));
        assert!(effects.iter().any(|e| matches!(e, UiEffect::ArmTimer(_))));
    }

    #[test]
    fn test_esc_closes_and_arms_hide_timer() {
        let mut overlay = opened(Role::Student);
        let effects = overlay.handle_key(key(KeyCode::Esc));
        assert!(!overlay.is_active());
        assert!(effects.iter().any(|e| matches!(
            e,
            UiEffect::ArmTimer(d) if d.action == DeferredAction::HideOverlay
        )));
    }

    #[test]
    fn test_click_outside_closes() {
        let viewport = Rect::new(0, 0, 120, 40);
        let mut overlay = opened(Role::Student);
        let popup = overlay_area(viewport);

        assert!(
            overlay
                .handle_click(viewport, popup.x + 2, popup.y + 2)
                .is_empty()
        );
        assert!(overlay.is_active());

        overlay.handle_click(viewport, 0, 0);
        assert!(!overlay.is_active());
    }

    #[test]
    fn test_click_switch_line_switches_role() {
        let viewport = Rect::new(0, 0, 120, 40);
        let layout = OverlayLayout::new(overlay_area(viewport));
        let mut overlay = opened(Role::Student);
        type_text(&mut overlay, "Ada");

        let line = layout
            .switch_line(Field::visible_for(Role::Student).len())
            .unwrap();
        let effects = overlay.handle_click(viewport, line.x + 3, line.y);

        assert_eq!(overlay.controller().role(), Some(Role::Teacher));
        assert_eq!(overlay.controller().value(Field::Name), "Ada");
        assert!(effects.iter().any(|e| matches!(e, UiEffect::ArmTimer(_))));
    }

    #[test]
    fn test_click_close_marker_closes() {
        let viewport = Rect::new(0, 0, 120, 40);
        let layout = OverlayLayout::new(overlay_area(viewport));
        let mut overlay = opened(Role::Teacher);

        let marker = layout.close_button;
        let effects = overlay.handle_click(viewport, marker.x + 1, marker.y);
        assert!(!overlay.is_active());
        assert!(effects.iter().any(|e| matches!(
            e,
            UiEffect::ArmTimer(d) if d.action == DeferredAction::HideOverlay
        )));
    }

    #[test]
    fn test_click_field_row_focuses_field() {
        let viewport = Rect::new(0, 0, 120, 40);
        let layout = OverlayLayout::new(overlay_area(viewport));
        let mut overlay = opened(Role::Teacher);

        // Name, Email, Password, ConfirmPassword, Age, Specialty
        let row = layout.field_row(5).unwrap();
        overlay.handle_click(viewport, row.x + 1, row.y);
        assert_eq!(overlay.controller().focused(), Some(Field::Specialty));
        assert!(overlay.is_active());
    }

    #[test]
    fn test_click_home_button_acknowledges() {
        let viewport = Rect::new(0, 0, 120, 40);
        let layout = OverlayLayout::new(overlay_area(viewport));
        let mut overlay = opened(Role::Student);
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Password, "engines!"),
            (Field::ConfirmPassword, "engines!"),
            (Field::Age, "36"),
        ] {
            overlay.controller.focus(field);
            type_text(&mut overlay, value);
        }
        overlay.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            overlay.controller().stage(),
            Some(Stage::Submitted(_))
        ));

        // The switch line is gone on the success view.
        let line = layout.switch_line(0).unwrap();
        assert!(overlay.handle_click(viewport, line.x + 3, line.y).is_empty());
        assert!(overlay.is_active());

        let button = layout.home_button;
        overlay.handle_click(viewport, button.x + 2, button.y);
        assert!(!overlay.is_active());
        assert_eq!(overlay.controller().presence(), Presence::Closing);
    }

    #[test]
    fn test_render_draws_close_marker() {
        let overlay = opened(Role::Student);
        let screen = render_to_string(&overlay, 100, 30);
        assert!(screen.contains(CLOSE_LABEL));
        assert!(!screen.contains(HOME_LABEL));
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut overlay = opened(Role::Teacher);
        overlay.handle_paste("Grace\nHopper");
        assert_eq!(overlay.controller().value(Field::Name), "GraceHopper");
    }

    #[test]
    fn test_successful_submit_then_enter_acknowledges() {
        let mut overlay = opened(Role::Student);
        for (i, value) in ["Ada", "ada@example.com", "engines!", "engines!", "36"]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                overlay.handle_key(key(KeyCode::Tab));
            }
            type_text(&mut overlay, value);
        }
        overlay.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            overlay.controller().stage(),
            Some(Stage::Submitted(_))
        ));

        let screen = render_to_string(&overlay, 100, 30);
        assert!(screen.contains("Account Created Successfully"));
        assert!(screen.contains("Go to Home Page"));

        overlay.handle_key(key(KeyCode::Enter));
        assert!(!overlay.is_active());
    }

    #[test]
    fn test_render_shows_role_fields_only() {
        let student = render_to_string(&opened(Role::Student), 100, 30);
        assert!(student.contains("Student registration"));
        assert!(student.contains("Study level"));
        assert!(!student.contains("Specialty"));
        assert!(student.contains("Create a teacher account instead."));
        assert!(student.contains("images/1.jpg"));

        let teacher = render_to_string(&opened(Role::Teacher), 100, 30);
        assert!(teacher.contains("Teacher registration"));
        assert!(teacher.contains("Specialty"));
        assert!(teacher.contains("Bio"));
        assert!(!teacher.contains("Study level"));
        assert!(teacher.contains("Create a Student account instead."));
    }

    #[test]
    fn test_render_masks_passwords_and_shows_errors() {
        let mut overlay = opened(Role::Student);
        overlay.controller.focus(Field::Password);
        type_text(&mut overlay, "short");

        let screen = render_to_string(&overlay, 100, 30);
        assert!(!screen.contains("short"));
        assert!(screen.contains("•••••"));
        assert!(screen.contains("Password must be at least 8 characters."));
    }

    #[test]
    fn test_render_hidden_draws_nothing() {
        let overlay = SignupOverlay::new(&Config::default());
        let screen = render_to_string(&overlay, 60, 20);
        assert!(screen.trim().is_empty());
    }
}
