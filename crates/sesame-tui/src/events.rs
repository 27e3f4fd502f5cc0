//! UI event types.
//!
//! Events are the only input to the reducer. Terminal input, ticks and the
//! results of background requests all arrive as a `UiEvent`.

use crossterm::event::Event;
use sesame_core::api::{ApiError, LoginResponse, LogoutResponse};

use crate::common::TaskId;
use crate::navigation::ProbeOrigin;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation).
    Tick,

    /// The runtime is about to render the first frame.
    ///
    /// Runs the focus hook of the initially mounted screen.
    Started,

    /// Raw terminal event from crossterm.
    Terminal(Event),

    /// A dashboard probe finished.
    SessionProbed {
        task: TaskId,
        origin: ProbeOrigin,
        result: Result<String, ApiError>,
    },

    /// A credential submission finished.
    LoginFinished {
        task: TaskId,
        result: Result<LoginResponse, ApiError>,
    },

    /// A logout call finished.
    LogoutFinished {
        task: TaskId,
        result: Result<LogoutResponse, ApiError>,
    },
}
