//! TUI module for the interactive task list
//!
//! The screen lives in `task_list`; `overlay` holds the dismissal rules shared
//! by every modal, and `components` the reusable iocraft pieces.

pub mod components;
pub mod layout;
pub mod navigation;
pub mod overlay;
pub mod task_list;
pub mod theme;

pub use task_list::{TaskListScreen, TaskListScreenProps};
pub use theme::{Theme, init_theme};
