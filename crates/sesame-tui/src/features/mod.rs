//! Feature slices for the TUI (state/update/render per slice).

pub mod alert;
pub mod login;
pub mod success;
