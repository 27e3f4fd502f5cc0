//! Success screen: confirmation message and logout.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::SuccessState;
pub use update::{handle_key, logout, on_logout_result};
