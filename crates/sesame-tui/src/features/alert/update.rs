use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press does while an alert is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Dismiss,
    Quit,
    Ignore,
}

pub fn handle_key(key: KeyEvent) -> AlertAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AlertAction::Quit,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => AlertAction::Dismiss,
        _ => AlertAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dismiss_keys() {
        assert_eq!(handle_key(key(KeyCode::Enter)), AlertAction::Dismiss);
        assert_eq!(handle_key(key(KeyCode::Esc)), AlertAction::Dismiss);
        assert_eq!(handle_key(key(KeyCode::Char(' '))), AlertAction::Dismiss);
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), AlertAction::Ignore);
        assert_eq!(handle_key(key(KeyCode::Tab)), AlertAction::Ignore);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c), AlertAction::Quit);
    }
}
