//! Rendering helpers shared by the screens and the alert popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;
use crate::theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the spinner glyph for a tick counter.
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Calculates a popup area centered in `area`.
pub fn calculate_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the base container for a popup (clears background, draws border and title).
///
/// Returns the inner area.
pub fn render_popup_container(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(theme::screen())
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Keyboard hint shown in a footer line.
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
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint]) {
    if area.height == 0 {
        return;
    }
    let hints_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", theme::hint()));
        }
        spans.push(Span::styled(
            hint.key,
            theme::hint().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", hint.action), theme::hint()));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// A single-line text field.
pub struct TextField<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub masked: bool,
    pub focused: bool,
    pub disabled: bool,
}

/// Renders a text field as a filled box with the value on its middle row.
pub fn render_text_field(frame: &mut Frame, area: Rect, field: &TextField<'_>) {
    frame.render_widget(
        Block::default().style(theme::input(field.focused, field.disabled)),
        area,
    );
    let row = middle_row(area, 1);
    let max_width = row.width.saturating_sub(2) as usize;

    let line = if field.value.is_empty() {
        let mut spans = Vec::new();
        if field.focused && !field.disabled {
            spans.push(Span::styled("█", theme::input(true, false)));
        }
        spans.push(Span::styled(field.placeholder, theme::placeholder()));
        Line::from(spans)
    } else {
        let shown = if field.masked {
            crate::common::mask(field.value)
        } else {
            field.value.to_string()
        };
        let mut spans = vec![Span::styled(
            truncate_start_with_ellipsis(&shown, max_width),
            theme::input(field.focused, field.disabled),
        )];
        if field.focused && !field.disabled {
            spans.push(Span::styled("█", theme::input(true, false)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// Renders a filled button with a centered label.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, disabled: bool) {
    let style = theme::button(focused, disabled);
    frame.render_widget(Block::default().style(style), area);
    let label = if focused && !disabled {
        format!("▸ {label} ◂")
    } else {
        label.to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
        middle_row(area, 1),
    );
}

/// Returns a column of `percent` width centered horizontally in `area`.
pub fn form_column(area: Rect, percent: u16) -> Rect {
    let percent = percent.min(100);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area)[1]
}

/// Returns the vertically centered `height` rows of `area`.
pub fn middle_row(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}
