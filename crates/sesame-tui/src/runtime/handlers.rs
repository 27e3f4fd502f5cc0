//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform one API call and return
//! the result as a `UiEvent`. The runtime spawns them and forwards the event
//! to the inbox. They never touch state.

use sesame_core::api::ApiClient;

use crate::common::TaskId;
use crate::events::UiEvent;
use crate::navigation::ProbeOrigin;

pub async fn session_probe(api: ApiClient, task: TaskId, origin: ProbeOrigin) -> UiEvent {
    let result = api.check_session().await;
    UiEvent::SessionProbed {
        task,
        origin,
        result,
    }
}

pub async fn login(api: ApiClient, task: TaskId, email: String, password: String) -> UiEvent {
    let result = api.login(&email, &password).await;
    UiEvent::LoginFinished { task, result }
}

pub async fn logout(api: ApiClient, task: TaskId) -> UiEvent {
    let result = api.logout().await;
    UiEvent::LogoutFinished { task, result }
}
