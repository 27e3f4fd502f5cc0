//! Blocking alert popup.
//!
//! While an alert is shown it swallows all input except the dismiss keys
//! and Ctrl+C.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::Alert;
pub use update::{AlertAction, handle_key};
