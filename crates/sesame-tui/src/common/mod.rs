//! Shared building blocks for the TUI (task tracking, text helpers).

mod task;
pub mod text;

pub use task::{TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use text::{mask, truncate_start_with_ellipsis, truncate_with_ellipsis};
