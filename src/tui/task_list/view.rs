//! Task list screen
//!
//! Wires [`TaskListState`] to iocraft: key and mouse events become
//! [`TaskListAction`]s, the reducer runs synchronously, and any returned
//! [`Effect`] is carried out by an async handler that feeds its result back
//! as another action.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

use std::time::Duration;

use iocraft::prelude::*;

use crate::paths::default_tasks_path;
use crate::source::{AnyTaskSource, FileTaskSource, TaskSource};
use crate::tui::components::{
    Clickable, EmptyState, EmptyStateKind, Footer, Header, Modal, ModalBorderColor, SearchBox,
    TaskDetail, TaskList,
};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::theme;

use super::keymap::key_to_action;
use super::model::{
    Effect, ListBody, OpenModal, TaskListAction, TaskListState, compute_task_list_view_model,
    reduce_task_list_state,
};

/// Rows taken by everything except task rows: header, search line, list
/// border, status row and footer
const CHROME_ROWS: u16 = 6;

/// Run one action through the reducer, storing the new state
fn dispatch(
    state: &mut State<TaskListState>,
    action: TaskListAction,
    list_height: usize,
) -> Option<Effect> {
    let mut guard = state.write();
    let (next, effect) = reduce_task_list_state(std::mem::take(&mut *guard), action, list_height);
    *guard = next;
    effect
}

/// Carry out `effect` and every effect that follows from it
async fn run_effects(
    mut state: State<TaskListState>,
    list_height: State<usize>,
    source: AnyTaskSource,
    debounce: Duration,
    mut effect: Option<Effect>,
) {
    while let Some(next) = effect.take() {
        let action = match next {
            Effect::Fetch(request) => {
                tracing::debug!(
                    query = %request.query,
                    offset = request.offset,
                    limit = request.limit,
                    "fetching page"
                );
                let outcome = source
                    .fetch_page(&request.query, request.offset, request.limit)
                    .await
                    .map_err(|e| e.to_string());
                TaskListAction::PageLoaded { request, outcome }
            }
            Effect::DebounceSearch { revision } => {
                tokio::time::sleep(debounce).await;
                TaskListAction::ApplySearch { revision }
            }
        };
        effect = dispatch(&mut state, action, list_height.get());
    }
}

const HELP_LINES: &[(&str, &str)] = &[
    ("j / Down", "Next task"),
    ("k / Up", "Previous task"),
    ("g / G", "First / last loaded task"),
    ("PgUp / PgDn", "Half page up / down"),
    ("wheel", "Scroll the list"),
    ("/", "Search"),
    ("Enter", "Task details"),
    ("r", "Retry after a failed load"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Props for the TaskListScreen component
#[derive(Default, Props)]
pub struct TaskListScreenProps {
    pub source: Option<AnyTaskSource>,
    /// Query typed and applied before the first page loads
    pub initial_query: String,
    pub page_size: usize,
    pub prefetch_rows: usize,
    pub search_debounce_ms: u64,
}

/// Incrementally loaded, searchable task list
#[component]
pub fn TaskListScreen<'a>(
    props: &TaskListScreenProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let source = props
        .source
        .clone()
        .unwrap_or_else(|| AnyTaskSource::File(FileTaskSource::new(default_tasks_path())));
    let debounce = Duration::from_millis(props.search_debounce_ms);
    let list_height = height.saturating_sub(CHROME_ROWS) as usize;

    let initial_query = props.initial_query.clone();
    let page_size = props.page_size;
    let prefetch_rows = props.prefetch_rows;
    let mut state = hooks.use_state(move || {
        TaskListState::new(page_size, prefetch_rows).with_initial_query(initial_query)
    });
    let mut shared_height = hooks.use_state(|| list_height);
    if shared_height.get() != list_height {
        shared_height.set(list_height);
    }

    // Runs effects produced by synchronous dispatches
    let effect_handler: Handler<Effect> = hooks.use_async_handler({
        let source = source.clone();
        move |effect: Effect| {
            let source = source.clone();
            async move {
                run_effects(state, shared_height, source, debounce, Some(effect)).await;
            }
        }
    });

    // Search edits arrive from the text input rather than the key map
    let search_handler: Handler<String> = hooks.use_async_handler({
        let source = source.clone();
        move |text: String| {
            let source = source.clone();
            let mut state = state;
            async move {
                let effect = dispatch(
                    &mut state,
                    TaskListAction::UpdateSearch(text),
                    shared_height.get(),
                );
                run_effects(state, shared_height, source, debounce, effect).await;
            }
        }
    });

    let scroll_up: Handler<()> = hooks.use_async_handler({
        let effect_handler = effect_handler.clone();
        move |()| {
            let effect_handler = effect_handler.clone();
            let mut state = state;
            async move {
                if let Some(effect) =
                    dispatch(&mut state, TaskListAction::ScrollUp, shared_height.get())
                {
                    effect_handler(effect);
                }
            }
        }
    });
    let scroll_down: Handler<()> = hooks.use_async_handler({
        let effect_handler = effect_handler.clone();
        move |()| {
            let effect_handler = effect_handler.clone();
            let mut state = state;
            async move {
                if let Some(effect) =
                    dispatch(&mut state, TaskListAction::ScrollDown, shared_height.get())
                {
                    effect_handler(effect);
                }
            }
        }
    });
    let go_to_top: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, TaskListAction::GoToTop, shared_height.get());
        }
    });
    let close_modal: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, TaskListAction::CloseModal, shared_height.get());
        }
    });

    hooks.use_terminal_events({
        let effect_handler = effect_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let focus = state.read().focus;
                if let Some(action) = key_to_action(code, modifiers, focus)
                    && let Some(effect) = dispatch(&mut state, action, list_height)
                {
                    effect_handler(effect);
                }
            }
            _ => {}
        }
    });

    // Request the next page when the viewport nears the end of what is loaded
    let wants_more = state.read().wants_auto_load(list_height);
    if wants_more
        && let Some(effect) = dispatch(&mut state, TaskListAction::AutoLoad, list_height)
    {
        effect_handler(effect);
    }

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_task_list_view_model(&state.read());
    let breakpoint = Breakpoint::from_width(width);
    let (modal_width, modal_height) = breakpoint.modal_size(width, height);
    let has_more = !state.read().list.is_exhausted();

    let body = match &vm.body {
        ListBody::Tasks => element! {
            Clickable(on_scroll_up: Some(scroll_up.clone()), on_scroll_down: Some(scroll_down.clone())) {
                TaskList(
                    tasks: vm.tasks.clone(),
                    selected_index: vm.selected_index,
                    scroll_offset: vm.scroll_offset,
                    has_focus: vm.list_focused,
                    visible_height: list_height,
                    query: vm.applied_query.clone(),
                    footer_row: Some(vm.footer_row.clone()),
                    breakpoint,
                )
            }
        }
        .into_any(),
        ListBody::Loading => element!(EmptyState(kind: EmptyStateKind::Loading)).into_any(),
        ListBody::Empty => element!(EmptyState(kind: EmptyStateKind::NoTasks)).into_any(),
        ListBody::NoResults { query } => element! {
            EmptyState(kind: EmptyStateKind::NoSearchResults, search_query: Some(query.clone()))
        }
        .into_any(),
        ListBody::Failed { message } => element! {
            EmptyState(kind: EmptyStateKind::LoadFailed, detail: Some(message.clone()))
        }
        .into_any(),
    };

    let modal = vm.modal.clone().map(|open| match open {
        OpenModal::Detail(task) => element! {
            Modal(
                title: format!("Task {}", task.id),
                width: modal_width,
                height: modal_height,
                footer_text: Some("Esc or click outside to close".to_string()),
                on_close: Some(close_modal.clone()),
            ) {
                TaskDetail(task)
            }
        }
        .into_any(),
        OpenModal::Help => element! {
            Modal(
                title: "Keyboard shortcuts".to_string(),
                width: modal_width,
                height: modal_height,
                close_on_outside_click: false,
                border_color: ModalBorderColor::Info,
                footer_text: Some("Esc to close".to_string()),
                on_close: Some(close_modal.clone()),
            ) {
                View(flex_direction: FlexDirection::Column) {
                    #(HELP_LINES.iter().map(|(key, action)| element! {
                        View(flex_direction: FlexDirection::Row) {
                            View(width: 14, flex_shrink: 0.0) {
                                Text(content: *key, color: theme.highlight, weight: Weight::Bold)
                            }
                            Text(content: *action, color: theme.text)
                        }
                    }))
                }
            }
        }
        .into_any(),
    });

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                source: Some(source.describe()),
                task_count: Some(vm.loaded_count),
                has_more,
                is_loading: vm.is_loading,
            )

            View(
                width: 100pct,
                height: 1,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Row,
            ) {
                View(flex_grow: 1.0) {
                    SearchBox(
                        value: vm.search_query.clone(),
                        has_focus: vm.search_focused,
                        on_change: Some(search_handler.clone()),
                    )
                }
                #(vm.show_go_top.then(|| element! {
                    Clickable(on_click: Some(go_to_top.clone())) {
                        Text(content: "[Top]", color: theme.highlight, weight: Weight::Bold)
                    }
                }))
            }

            View(flex_grow: 1.0, width: 100pct) {
                #(body)
            }

            Footer(shortcuts: vm.shortcuts.clone())

            #(modal)
        }
    }
}
