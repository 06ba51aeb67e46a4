use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Centers a `width` x `height` box in `area`, clamped to leave a margin.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Shifts a rect horizontally, staying inside `bounds`.
pub fn offset_x(rect: Rect, dx: i16, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right().saturating_sub(rect.width));
    let x = (i32::from(rect.x) + i32::from(dx)).clamp(min_x, max_x.max(min_x));
    Rect::new(x as u16, rect.y, rect.width, rect.height)
}

/// Clears the background and draws the bordered, titled container.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Area inside a bordered container.
pub fn inner_area(popup: Rect) -> Rect {
    Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    )
}

/// A key and the action it triggers, shown in the footer.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a centered line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a horizontal separator `y_offset` rows into `area`.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}

/// A labelled single-line input: `Label  > value█`.
pub struct InputLine<'a> {
    pub label: &'a str,
    pub label_width: u16,
    /// Text to display (already masked for secrets).
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub invalid: bool,
    pub accent: Color,
}

/// Renders an input line; the cursor is drawn only when focused.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let label_color = if input.invalid {
        Color::Red
    } else if input.focused {
        input.accent
    } else {
        Color::Gray
    };
    let prompt = if input.focused { "> " } else { "  " };
    let fixed = input.label_width as usize + prompt.len() + 1;
    let max_text_width = (area.width as usize).saturating_sub(fixed);

    let mut spans = vec![
        Span::styled(
            format!("{:<width$}", input.label, width = input.label_width as usize),
            Style::default().fg(label_color),
        ),
        Span::styled(prompt, Style::default().fg(input.accent)),
    ];

    if input.value.is_empty() {
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(input.accent)));
        }
        spans.push(Span::styled(
            truncate_start_with_ellipsis(input.placeholder, max_text_width),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let text_color = if input.invalid {
            Color::LightRed
        } else {
            Color::White
        };
        spans.push(Span::styled(
            truncate_start_with_ellipsis(input.value, max_text_width),
            Style::default().fg(text_color),
        ));
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(input.accent)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
