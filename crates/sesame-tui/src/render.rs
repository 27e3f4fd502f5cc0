//! Top-level render function. Pure: reads state, draws a frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::features::{alert, login, success};
use crate::state::{AppState, Screen};
use crate::theme;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.screen {
        Screen::Login(state) => login::render(state, frame, area, app.spinner_frame),
        Screen::Success(state) => success::render(state, frame, area, app.spinner_frame),
    }

    render_origin(app, frame, area);

    if let Some(alert) = &app.alert {
        alert::render(alert, frame, area);
    }
}

/// Shows the service origin on the top row.
fn render_origin(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height < 3 {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);
    let text = truncate_with_ellipsis(&app.origin, area.width.saturating_sub(2) as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme::hint()))).alignment(Alignment::Right),
        row,
    );
}
