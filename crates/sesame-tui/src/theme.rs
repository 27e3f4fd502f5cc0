//! Shared palette for both screens.

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(0xDF, 0xFF, 0xEF);
pub const INPUT_BG: Color = Color::Rgb(0xAF, 0xDF, 0xCF);
pub const INPUT_TEXT: Color = Color::Rgb(0x0F, 0x30, 0x4F);
pub const PLACEHOLDER: Color = Color::Rgb(0x00, 0x3F, 0x5C);
pub const BUTTON_BG: Color = Color::Rgb(0xAF, 0xD0, 0xEF);
pub const BUTTON_TEXT: Color = Color::Rgb(0x2F, 0x50, 0x6F);
pub const DISABLED_TEXT: Color = Color::Rgb(0x7F, 0x9F, 0x9F);
pub const ALERT_BORDER: Color = Color::Rgb(0xB0, 0x30, 0x30);
pub const HINT: Color = Color::Rgb(0x4F, 0x70, 0x7F);

/// Share of the terminal width taken by inputs and buttons.
pub const FORM_WIDTH_PERCENT: u16 = 70;

pub fn screen() -> Style {
    Style::default().bg(BACKGROUND).fg(INPUT_TEXT)
}

pub fn input(focused: bool, disabled: bool) -> Style {
    let style = Style::default().bg(INPUT_BG).fg(INPUT_TEXT);
    if disabled {
        style.fg(DISABLED_TEXT)
    } else if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn placeholder() -> Style {
    Style::default().bg(INPUT_BG).fg(PLACEHOLDER)
}

pub fn button(focused: bool, disabled: bool) -> Style {
    let style = Style::default()
        .bg(BUTTON_BG)
        .fg(BUTTON_TEXT)
        .add_modifier(Modifier::BOLD);
    if disabled {
        style.fg(DISABLED_TEXT).remove_modifier(Modifier::BOLD)
    } else if focused {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Bold message text (the success banner).
pub fn message() -> Style {
    Style::default()
        .bg(BACKGROUND)
        .fg(BUTTON_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default().bg(BACKGROUND).fg(HINT)
}
