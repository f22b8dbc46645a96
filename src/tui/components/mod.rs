//! Shared TUI components

pub mod clickable;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal;
pub mod modal_container;
pub mod modal_overlay;
pub mod search_box;
pub mod task_detail;
pub mod task_list;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
pub use modal::{Modal, ModalProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use task_detail::{TaskDetail, TaskDetailProps};
pub use task_list::{TaskList, TaskListProps, TaskRow, TaskRowProps};
