//! Login screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sesame_core::api::{ApiError, LoginResponse, is_success_marker};

use super::state::{LoginField, LoginState};
use crate::features::alert::Alert;
use crate::navigation::{ProbeOrigin, Request, Route, ScreenUpdate};

const LOGIN_ALERT_TITLE: &str = "Error";

/// Lifecycle hook run whenever the Login screen becomes active.
///
/// Probes the session so an existing login skips the form.
pub fn on_focus(state: &mut LoginState) -> ScreenUpdate {
    state.checking = true;
    ScreenUpdate::request(Request::ProbeSession(ProbeOrigin::Focus))
}

pub fn handle_key(state: &mut LoginState, key: KeyEvent) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => ScreenUpdate::quit(),
        KeyCode::Esc => ScreenUpdate::quit(),
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            ScreenUpdate::none()
        }
        KeyCode::Enter => match state.focus {
            LoginField::Email => {
                state.focus = LoginField::Password;
                ScreenUpdate::none()
            }
            LoginField::Password | LoginField::Submit => submit(state),
        },
        _ if state.is_busy() => ScreenUpdate::none(),
        KeyCode::Backspace => {
            if let Some(value) = state.focused_value_mut() {
                value.pop();
            }
            ScreenUpdate::none()
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            if let Some(value) = state.focused_value_mut() {
                value.push(c);
            }
            ScreenUpdate::none()
        }
        _ => ScreenUpdate::none(),
    }
}

/// Inserts pasted text into the focused field.
///
/// Line breaks are dropped since both fields are single-line.
pub fn handle_paste(state: &mut LoginState, text: &str) {
    if state.is_busy() {
        return;
    }
    if let Some(value) = state.focused_value_mut() {
        value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }
}

/// Submits the typed credentials.
///
/// No-op while a submission or focus probe is in flight.
pub fn submit(state: &mut LoginState) -> ScreenUpdate {
    if state.is_busy() {
        return ScreenUpdate::none();
    }
    state.loading = true;
    ScreenUpdate::request(Request::Login {
        email: state.email.clone(),
        password: state.password.clone(),
    })
}

pub fn on_login_result(
    state: &mut LoginState,
    result: Result<LoginResponse, ApiError>,
) -> ScreenUpdate {
    state.loading = false;
    match result {
        Ok(response) if response.is_success() => {
            state.session_headers = Some(response.headers);
            state.email.clear();
            state.password.clear();
            state.focus = LoginField::Email;
            // Supersedes any focus probe still in flight.
            state.checking = false;
            ScreenUpdate::request(Request::ProbeSession(ProbeOrigin::PostLogin))
        }
        Ok(response) => {
            let status = response.status.as_u16();
            let err = if response.status.is_success() {
                ApiError::unexpected_status(status)
            } else {
                ApiError::http_status(status)
            };
            tracing::warn!(status, "login rejected");
            ScreenUpdate::alert(login_failed_alert(&err))
        }
        Err(err) => {
            tracing::warn!(error = %err, network = err.is_network(), "login request failed");
            ScreenUpdate::alert(login_failed_alert(&err))
        }
    }
}

pub fn on_probe_result(
    state: &mut LoginState,
    origin: ProbeOrigin,
    result: Result<String, ApiError>,
) -> ScreenUpdate {
    if origin == ProbeOrigin::Focus {
        state.checking = false;
    }
    match result {
        Ok(body) if is_success_marker(&body) => ScreenUpdate::navigate(Route::Success),
        Ok(_) => {
            tracing::debug!(?origin, "no active session");
            ScreenUpdate::none()
        }
        Err(err) => {
            tracing::warn!(?origin, error = %err, "session probe failed");
            ScreenUpdate::none()
        }
    }
}

fn login_failed_alert(err: &ApiError) -> Alert {
    Alert::new(
        LOGIN_ALERT_TITLE,
        format!("An error has occurred in POST request: {err}"),
    )
}
