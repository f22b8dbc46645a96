//! Dismissible modal dialog
//!
//! The modal owns none of its visibility: it reports a close request through
//! `on_close` and the parent decides whether to stop rendering it. Which
//! events count as a close request is decided by
//! [`dismiss_intent`](crate::tui::overlay::dismiss_intent).

use iocraft::prelude::*;

use super::modal_container::{ModalBorderColor, ModalContainer};
use super::modal_overlay::ModalOverlay;
use crate::tui::overlay::{
    DismissIntent, DismissPolicy, FocusLatch, OverlayEvent, Rect, dismiss_intent,
};

/// Props for the Modal component
#[derive(Default, Props)]
pub struct ModalProps<'a> {
    pub title: String,
    /// Dialog size in cells, clamped to the terminal
    pub width: u16,
    pub height: u16,
    /// Close when the user clicks outside the dialog (default: true)
    pub close_on_outside_click: Option<bool>,
    pub border_color: ModalBorderColor,
    pub footer_text: Option<String>,
    /// Invoked once per close request
    pub on_close: Option<Handler<()>>,
    pub children: Vec<AnyElement<'a>>,
}

fn request_close(intent: DismissIntent, on_close: Option<&Handler<()>>) {
    tracing::debug!(reason = ?intent.reason, "modal close requested");
    if let Some(handler) = on_close {
        handler(());
    }
}

/// Centered dialog over a backdrop
///
/// Esc and the `[x]` control always request a close. A click outside the
/// dialog does so only when `close_on_outside_click` allows it. The dialog
/// takes keyboard focus the first time it renders.
#[component]
pub fn Modal<'a>(props: &mut ModalProps<'a>, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (term_width, term_height) = hooks.use_terminal_size();
    let mut focus = hooks.use_state(FocusLatch::default);

    let first_render = !focus.read().is_acquired();
    if first_render && focus.write().acquire() {
        tracing::debug!(title = %props.title, "modal focused");
    }

    let policy = DismissPolicy {
        close_on_outside_click: props.close_on_outside_click.unwrap_or(true),
    };
    let rect = Rect::centered(term_width, term_height, props.width, props.height);
    let on_close = props.on_close.clone();

    let close_action: Handler<()> = hooks.use_async_handler({
        let on_close = on_close.clone();
        move |()| {
            let on_close = on_close.clone();
            async move {
                if let Some(intent) = dismiss_intent(policy, OverlayEvent::CloseAction, &rect) {
                    request_close(intent, on_close.as_ref());
                }
            }
        }
    });

    hooks.use_terminal_events(move |event| {
        if !focus.read().is_acquired() {
            return;
        }
        let overlay_event = match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                OverlayEvent::Key(code)
            }
            TerminalEvent::FullscreenMouse(mouse_event)
                if matches!(mouse_event.kind, MouseEventKind::Down(_)) =>
            {
                OverlayEvent::Click {
                    column: mouse_event.column,
                    row: mouse_event.row,
                }
            }
            _ => return,
        };
        if let Some(intent) = dismiss_intent(policy, overlay_event, &rect) {
            request_close(intent, on_close.as_ref());
        }
    });

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                position: Position::Absolute,
                left: u32::from(rect.left),
                top: u32::from(rect.top),
            ) {
                ModalContainer(
                    width: rect.width,
                    height: rect.height,
                    border_color: props.border_color,
                    title: props.title.clone(),
                    footer_text: props.footer_text.clone(),
                    on_close: Some(close_action),
                ) {
                    #(std::mem::take(&mut props.children))
                }
            }
        }
    }
}
