//! Modal container component
//!
//! Standard dialog box: a title row with a clickable close control, a content
//! area and an optional footer line.

use iocraft::prelude::*;

use super::clickable::Clickable;
use crate::tui::theme::theme;

/// Border colors for common dialog kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalBorderColor {
    #[default]
    Focused,
    Error,
    Info,
}

impl ModalBorderColor {
    pub fn to_color(self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Error => theme().error,
            Self::Info => Color::Cyan,
        }
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: u16,
    pub height: u16,
    pub border_color: ModalBorderColor,
    pub title: String,
    pub footer_text: Option<String>,
    /// Invoked when the `[x]` control is clicked
    pub on_close: Option<Handler<()>>,
    pub children: Vec<AnyElement<'a>>,
}

/// Bordered dialog box
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: u32::from(props.width),
            height: u32::from(props.height),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: props.border_color.to_color(),
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
        ) {
            View(
                width: 100pct,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
            ) {
                Text(
                    content: props.title.clone(),
                    color: Color::Cyan,
                    weight: Weight::Bold,
                )
                View(flex_grow: 1.0)
                Clickable(on_click: props.on_close.clone()) {
                    Text(content: "[x]", color: theme.text_dimmed, weight: Weight::Bold)
                }
            }

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|text| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_shrink: 0.0,
                ) {
                    Text(content: text, color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_color_default() {
        assert_eq!(ModalBorderColor::default(), ModalBorderColor::Focused);
        assert!(matches!(ModalBorderColor::Info.to_color(), Color::Cyan));
    }
}
