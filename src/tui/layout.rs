//! Terminal size breakpoints
//!
//! Screens pick column sets and modal sizes from the terminal width instead
//! of hard-coding one layout.

/// Width class of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Breakpoint {
    /// Under 80 columns: id and title only
    Compact,
    /// 80 to 119 columns: adds status and priority
    #[default]
    Regular,
    /// 120 columns and up: adds assignee and tags
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..80 => Breakpoint::Compact,
            80..120 => Breakpoint::Regular,
            _ => Breakpoint::Wide,
        }
    }

    /// Modal box size (columns, rows) for a terminal of this class
    ///
    /// Compact terminals get a box that leaves a two-cell margin on each
    /// side; larger ones get a fixed-size dialog.
    pub fn modal_size(self, term_width: u16, term_height: u16) -> (u16, u16) {
        match self {
            Breakpoint::Compact => (
                term_width.saturating_sub(4),
                term_height.saturating_sub(4).min(18),
            ),
            Breakpoint::Regular | Breakpoint::Wide => (70, term_height.saturating_sub(6).min(20)),
        }
    }

    pub fn shows_status(self) -> bool {
        self >= Breakpoint::Regular
    }

    pub fn shows_assignee(self) -> bool {
        self == Breakpoint::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Regular);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Regular);
        assert_eq!(Breakpoint::from_width(120), Breakpoint::Wide);
    }

    #[test]
    fn test_modal_size() {
        assert_eq!(Breakpoint::Compact.modal_size(60, 30), (56, 18));
        assert_eq!(Breakpoint::Wide.modal_size(200, 50), (70, 20));
        assert_eq!(Breakpoint::Regular.modal_size(100, 16), (70, 10));
    }

    #[test]
    fn test_column_visibility() {
        assert!(!Breakpoint::Compact.shows_status());
        assert!(Breakpoint::Regular.shows_status());
        assert!(!Breakpoint::Regular.shows_assignee());
        assert!(Breakpoint::Wide.shows_assignee());
    }
}
