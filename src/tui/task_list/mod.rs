//! Incrementally loaded task list screen
//!
//! - `controller` - paging state machine with stale-response protection
//! - `proximity` - decides when scrolling has come close enough to the end
//! - `model` - reducer and view model for the screen
//! - `keymap` - key bindings
//! - `view` - the iocraft component

pub mod controller;
pub mod keymap;
pub mod model;
pub mod proximity;
pub mod view;

pub use controller::{Completion, IncrementalList, LoadState, PageRequest};
pub use keymap::key_to_action;
pub use model::{
    Effect, Focus, ListBody, ListFooterRow, OpenModal, TaskListAction, TaskListState,
    TaskListViewModel, compute_task_list_view_model, reduce_task_list_state,
};
pub use proximity::{ScrollWindow, near_end};
pub use view::{TaskListScreen, TaskListScreenProps};
