use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

use super::Alert;
use crate::theme;
use crate::widgets::{InputHint, calculate_popup_area, render_hints, render_popup_container};

const ALERT_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 6;

pub fn render(alert: &Alert, frame: &mut Frame, area: Rect) {
    // Borders, hint row and one blank line around the message.
    let text_width = ALERT_WIDTH.saturating_sub(4).max(1);
    let message_rows = (alert.message.chars().count() as u16).div_ceil(text_width);
    let height = (message_rows + 5).max(MIN_HEIGHT);

    let popup = calculate_popup_area(area, ALERT_WIDTH, height);
    let inner = render_popup_container(frame, popup, &alert.title, theme::ALERT_BORDER);

    let body = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(alert.message.as_str())
            .style(theme::screen())
            .wrap(Wrap { trim: true }),
        body,
    );

    render_hints(frame, inner, &[InputHint::new("Enter", "dismiss")]);
}
