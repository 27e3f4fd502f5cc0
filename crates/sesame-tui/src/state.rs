//! Application state composition.
//!
//! ```text
//! AppState
//! ├── screen: Screen            (exactly one mounted screen)
//! │   ├── Login(LoginState)     (credentials, focus, loading/checking)
//! │   └── Success(SuccessState) (loading)
//! ├── alert: Option<Alert>      (blocking popup)
//! ├── task_seq: TaskSeq         (request id generator)
//! └── tasks: Tasks              (in-flight slot per request kind)
//! ```
//!
//! Only the reducer (`update::update`) mutates this state.

use crate::common::{TaskSeq, Tasks};
use crate::features::alert::Alert;
use crate::features::login::LoginState;
use crate::features::success::SuccessState;
use crate::navigation::Route;

/// The mounted screen. Owns its state; replaced wholesale on navigation.
#[derive(Debug)]
pub enum Screen {
    Login(LoginState),
    Success(SuccessState),
}

impl Screen {
    /// Builds a fresh screen for `route`.
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Login => Screen::Login(LoginState::new()),
            Route::Success => Screen::Success(SuccessState::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Success(_) => Route::Success,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub alert: Option<Alert>,
    pub should_quit: bool,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    /// Tick counter driving the spinner.
    pub spinner_frame: usize,
    /// Service origin, shown in the footer.
    pub origin: String,
}

impl AppState {
    /// Creates state with the Login screen mounted.
    ///
    /// The Login focus hook runs on `UiEvent::Started`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            screen: Screen::mount(Route::Login),
            alert: None,
            should_quit: false,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            origin: origin.into(),
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }
}
