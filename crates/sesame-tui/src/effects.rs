//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! Every request effect carries the `TaskId` the reducer registered for it,
//! so the result event can be matched against the in-flight slot.

use crate::common::TaskId;
use crate::navigation::ProbeOrigin;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the dashboard to check whether a session exists.
    ProbeSession { task: TaskId, origin: ProbeOrigin },

    /// Submit credentials to the login endpoint.
    SubmitLogin {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Call the logout endpoint.
    Logout { task: TaskId },
}
