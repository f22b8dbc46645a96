pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod source;
pub mod tui;
pub mod types;

pub use config::{Config, SourceKind};
pub use error::{Result, TaskdeckError};
pub use source::{AnyTaskSource, FileTaskSource, HttpTaskSource, Page, TaskSource};
pub use tui::task_list::{Completion, IncrementalList, LoadState, PageRequest};
pub use types::{Task, TaskPriority, TaskStatus};
