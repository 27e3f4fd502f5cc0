use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::{LoginField, LoginState};
use crate::theme;
use crate::widgets::{
    InputHint, TextField, form_column, render_button, render_hints, render_text_field, spinner,
};

const FIELD_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

pub fn render(state: &LoginState, frame: &mut Frame, area: Rect, spinner_frame: usize) {
    frame.render_widget(Block::default().style(theme::screen()), area);

    let column = form_column(area, theme::FORM_WIDTH_PERCENT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(column);

    let disabled = state.is_busy();
    render_text_field(
        frame,
        rows[1],
        &TextField {
            value: &state.email,
            placeholder: "Email",
            masked: false,
            focused: state.focus == LoginField::Email,
            disabled,
        },
    );
    render_text_field(
        frame,
        rows[3],
        &TextField {
            value: &state.password,
            placeholder: "Password",
            masked: true,
            focused: state.focus == LoginField::Password,
            disabled,
        },
    );
    render_button(
        frame,
        rows[5],
        "LOGIN",
        state.focus == LoginField::Submit,
        disabled,
    );

    if let Some(status) = status_text(state) {
        let line = Line::from(vec![
            Span::styled(format!("{} ", spinner(spinner_frame)), theme::hint()),
            Span::styled(status, theme::hint()),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            rows[7],
        );
    }

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "login"),
            InputHint::new("Esc", "quit"),
        ],
    );
}

fn status_text(state: &LoginState) -> Option<&'static str> {
    if state.loading {
        Some("Signing in…")
    } else if state.checking {
        Some("Checking session…")
    } else {
        None
    }
}
