//! Dismissal rules for modal overlays
//!
//! An overlay decides *when* it should close and reports that as a
//! [`DismissIntent`]; whoever owns the overlay's visibility acts on it. The
//! decision is a pure function of the incoming event, the dismiss policy and
//! a hit test against the overlay's content box.

use iocraft::prelude::KeyCode;

/// Terminal-level events an overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A key press
    Key(KeyCode),
    /// A mouse button press at absolute terminal coordinates
    Click { column: u16, row: u16 },
    /// The overlay's own close control was activated
    CloseAction,
}

/// Why a close was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    DismissKey,
    OutsideClick,
    CloseAction,
}

/// A request to close the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissIntent {
    pub reason: DismissReason,
}

impl DismissIntent {
    fn new(reason: DismissReason) -> Self {
        Self { reason }
    }
}

/// Which events are allowed to close an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    /// Close when a click lands outside the content box
    pub close_on_outside_click: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            close_on_outside_click: true,
        }
    }
}

/// Hit test for the protected content region of an overlay
pub trait ContentBoundary {
    fn contains(&self, column: u16, row: u16) -> bool;
}

/// Axis-aligned box in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A `width` x `height` box centered in a `term_width` x `term_height`
    /// terminal, clamped to the terminal size
    pub fn centered(term_width: u16, term_height: u16, width: u16, height: u16) -> Self {
        let width = width.min(term_width);
        let height = height.min(term_height);
        Self {
            left: (term_width - width) / 2,
            top: (term_height - height) / 2,
            width,
            height,
        }
    }
}

impl ContentBoundary for Rect {
    fn contains(&self, column: u16, row: u16) -> bool {
        let right = u32::from(self.left) + u32::from(self.width);
        let bottom = u32::from(self.top) + u32::from(self.height);
        column >= self.left
            && u32::from(column) < right
            && row >= self.top
            && u32::from(row) < bottom
    }
}

/// Decide whether `event` should close the overlay
///
/// - `Esc` always closes, whatever the policy says
/// - a click outside `boundary` closes only when the policy allows it
/// - a click inside `boundary` never closes
/// - the close control always closes
pub fn dismiss_intent<B: ContentBoundary + ?Sized>(
    policy: DismissPolicy,
    event: OverlayEvent,
    boundary: &B,
) -> Option<DismissIntent> {
    match event {
        OverlayEvent::Key(KeyCode::Esc) => Some(DismissIntent::new(DismissReason::DismissKey)),
        OverlayEvent::Key(_) => None,
        OverlayEvent::Click { column, row } => {
            if policy.close_on_outside_click && !boundary.contains(column, row) {
                Some(DismissIntent::new(DismissReason::OutsideClick))
            } else {
                None
            }
        }
        OverlayEvent::CloseAction => Some(DismissIntent::new(DismissReason::CloseAction)),
    }
}

/// One-shot latch for claiming input focus when an overlay mounts
///
/// `acquire` returns `true` the first time only, so re-renders of the same
/// overlay do not steal focus again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusLatch {
    acquired: bool,
}

impl FocusLatch {
    pub fn acquire(&mut self) -> bool {
        !std::mem::replace(&mut self.acquired, true)
    }

    pub fn is_acquired(&self) -> bool {
        self.acquired
    }
}
