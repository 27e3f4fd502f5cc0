//! Success screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sesame_core::api::{ApiError, LogoutResponse};

use super::state::SuccessState;
use crate::navigation::{Request, Route, ScreenUpdate};

pub fn handle_key(state: &mut SuccessState, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ScreenUpdate::quit()
        }
        KeyCode::Char('q') | KeyCode::Esc => ScreenUpdate::quit(),
        KeyCode::Enter | KeyCode::Char('l') => logout(state),
        _ => ScreenUpdate::none(),
    }
}

/// Starts a logout. No-op while one is already in flight.
pub fn logout(state: &mut SuccessState) -> ScreenUpdate {
    if state.loading {
        return ScreenUpdate::none();
    }
    state.loading = true;
    ScreenUpdate::request(Request::Logout)
}

/// Navigates back to Login only on a 200 carrying `logout ok`.
///
/// Anything else keeps the user here without an alert.
pub fn on_logout_result(
    state: &mut SuccessState,
    result: Result<LogoutResponse, ApiError>,
) -> ScreenUpdate {
    state.loading = false;
    match result {
        Ok(response) if response.is_logged_out() => ScreenUpdate::navigate(Route::Login),
        Ok(response) => {
            tracing::warn!(
                status = response.status.as_u16(),
                body = %response.body.trim(),
                "logout not confirmed"
            );
            ScreenUpdate::none()
        }
        Err(err) => {
            tracing::warn!(error = %err, network = err.is_network(), "logout request failed");
            ScreenUpdate::none()
        }
    }
}
