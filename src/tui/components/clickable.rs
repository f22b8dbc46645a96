//! Clickable wrapper component for mouse interaction
//!
//! Events are delivered only when they occur within the component's bounds,
//! with coordinates relative to its top-left corner.

use iocraft::prelude::*;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    pub children: Vec<AnyElement<'a>>,
    /// Invoked on mouse button press
    pub on_click: Option<Handler<()>>,
    pub on_scroll_up: Option<Handler<()>>,
    pub on_scroll_down: Option<Handler<()>>,
}

/// Wraps its first child and forwards clicks and wheel events
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();
    let on_scroll_up = props.on_scroll_up.clone();
    let on_scroll_down = props.on_scroll_down.clone();

    hooks.use_local_terminal_events(move |event| {
        let TerminalEvent::FullscreenMouse(mouse_event) = event else {
            return;
        };
        let handler = match mouse_event.kind {
            MouseEventKind::Down(_) => &on_click,
            MouseEventKind::ScrollUp => &on_scroll_up,
            MouseEventKind::ScrollDown => &on_scroll_down,
            _ => return,
        };
        if let Some(handler) = handler {
            handler(());
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}
