//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{alert, login, success};
use crate::navigation::{Request, Route, ScreenUpdate};
use crate::state::{AppState, Screen};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Started => run_focus_hook(app),
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SessionProbed {
            task,
            origin,
            result,
        } => {
            if !app.tasks.state_mut(TaskKind::SessionProbe).finish_if_active(task) {
                tracing::debug!(?task, "ignoring superseded session probe");
                return vec![];
            }
            let Screen::Login(state) = &mut app.screen else {
                return vec![];
            };
            let update = login::on_probe_result(state, origin, result);
            apply_screen_update(app, update)
        }
        UiEvent::LoginFinished { task, result } => {
            if !app.tasks.state_mut(TaskKind::Login).finish_if_active(task) {
                return vec![];
            }
            let Screen::Login(state) = &mut app.screen else {
                return vec![];
            };
            let update = login::on_login_result(state, result);
            apply_screen_update(app, update)
        }
        UiEvent::LogoutFinished { task, result } => {
            if !app.tasks.state_mut(TaskKind::Logout).finish_if_active(task) {
                return vec![];
            }
            let Screen::Success(state) = &mut app.screen else {
                return vec![];
            };
            let update = success::on_logout_result(state, result);
            apply_screen_update(app, update)
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.alert.is_none()
                && let Screen::Login(state) = &mut app.screen
            {
                login::handle_paste(state, &text);
            }
            vec![]
        }
        Event::FocusGained => run_focus_hook(app),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if app.alert.is_some() {
        return match alert::handle_key(key) {
            alert::AlertAction::Dismiss => {
                app.alert = None;
                vec![]
            }
            alert::AlertAction::Quit => vec![UiEffect::Quit],
            alert::AlertAction::Ignore => vec![],
        };
    }

    let update = match &mut app.screen {
        Screen::Login(state) => login::handle_key(state, key),
        Screen::Success(state) => success::handle_key(state, key),
    };
    apply_screen_update(app, update)
}

/// Runs the focus lifecycle hook of the mounted screen.
fn run_focus_hook(app: &mut AppState) -> Vec<UiEffect> {
    let update = match &mut app.screen {
        Screen::Login(state) => login::on_focus(state),
        Screen::Success(_) => return vec![],
    };
    apply_screen_update(app, update)
}

/// Executes a screen update: registers requests, raises alerts, navigates.
fn apply_screen_update(app: &mut AppState, update: ScreenUpdate) -> Vec<UiEffect> {
    if update.quit {
        return vec![UiEffect::Quit];
    }

    let mut effects = Vec::with_capacity(update.requests.len());
    for request in update.requests {
        let task = app.task_seq.next_id();
        app.tasks.state_mut(request.kind()).on_started(task);
        effects.push(match request {
            Request::ProbeSession(origin) => UiEffect::ProbeSession { task, origin },
            Request::Login { email, password } => UiEffect::SubmitLogin {
                task,
                email,
                password,
            },
            Request::Logout => UiEffect::Logout { task },
        });
    }

    if let Some(alert) = update.alert {
        app.alert = Some(alert);
    }

    if let Some(route) = update.navigate {
        effects.extend(navigate(app, route));
    }

    effects
}

/// Mounts a fresh screen for `route` and runs its focus hook.
fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    tracing::info!(from = ?app.route(), to = ?route, "navigate");
    app.screen = Screen::mount(route);
    run_focus_hook(app)
}
