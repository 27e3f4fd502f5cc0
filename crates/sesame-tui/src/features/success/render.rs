use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::SuccessState;
use crate::theme;
use crate::widgets::{InputHint, form_column, render_button, render_hints, spinner};

const SUCCESS_MESSAGE: &str = "Logged-in successfully!";

pub fn render(state: &SuccessState, frame: &mut Frame, area: Rect, spinner_frame: usize) {
    frame.render_widget(Block::default().style(theme::screen()), area);

    let column = form_column(area, theme::FORM_WIDTH_PERCENT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(SUCCESS_MESSAGE, theme::message())))
            .alignment(Alignment::Center),
        rows[1],
    );

    render_button(frame, rows[3], "LOGOUT", true, state.loading);

    if state.loading {
        let line = Line::from(Span::styled(
            format!("{} Logging out…", spinner(spinner_frame)),
            theme::hint(),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[5]);
    }

    render_hints(
        frame,
        area,
        &[InputHint::new("Enter", "logout"), InputHint::new("q", "quit")],
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_renders_message_and_button() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| render(&SuccessState::new(), frame, frame.area(), 0))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(screen.contains(SUCCESS_MESSAGE));
        assert!(screen.contains("LOGOUT"));
    }
}
