//! Full-screen layer that sits above the screen content while a modal is open

use iocraft::prelude::*;

use crate::tui::theme::{Theme, theme};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Paint the theme backdrop over the content behind the modal
    pub show_backdrop: bool,
    pub children: Vec<AnyElement<'a>>,
}

/// Backdrop paint for `theme`, or none when the backdrop is off
fn backdrop_color(theme: &Theme, show_backdrop: bool) -> Option<Color> {
    show_backdrop.then_some(theme.backdrop)
}

/// Absolute, full-screen layer for modal content
///
/// Children position themselves inside the layer; the layer only covers the
/// screen and optionally paints the backdrop. Dark and light themes use
/// different backdrop shades so the dialog stands out in both.
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let backdrop = backdrop_color(theme(), props.show_backdrop);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            background_color: backdrop,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
