//! Routes and the update value screen controllers hand back to the reducer.
//!
//! Screen controllers never touch `AppState` directly. They mutate their own
//! screen state and describe everything else (requests, navigation, alerts)
//! in a `ScreenUpdate`, which `update::apply_screen_update` executes.

use crate::common::TaskKind;
use crate::features::alert::Alert;

/// The two screens the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Success,
}

/// Why a session probe was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOrigin {
    /// The Login screen gained focus.
    Focus,
    /// A login was just accepted.
    PostLogin,
}

/// A request a screen wants the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ProbeSession(ProbeOrigin),
    Login { email: String, password: String },
    Logout,
}

impl Request {
    pub fn kind(&self) -> TaskKind {
        match self {
            Request::ProbeSession(_) => TaskKind::SessionProbe,
            Request::Login { .. } => TaskKind::Login,
            Request::Logout => TaskKind::Logout,
        }
    }
}

/// Update returned by screen handlers.
#[derive(Debug, Default)]
pub struct ScreenUpdate {
    pub requests: Vec<Request>,
    pub navigate: Option<Route>,
    pub alert: Option<Alert>,
    pub quit: bool,
}

impl ScreenUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn request(request: Request) -> Self {
        Self::none().with_request(request)
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            ..Self::default()
        }
    }

    pub fn alert(alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_request(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }
}
