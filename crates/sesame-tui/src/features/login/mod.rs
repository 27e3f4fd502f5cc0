//! Login screen: credential form, session probe on focus, submission.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{LoginField, LoginState};
pub use update::{handle_key, handle_paste, on_focus, on_login_result, on_probe_result, submit};
