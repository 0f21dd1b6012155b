/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }

    /// Side-by-side cards for a grid of `items` (features, plans, stats).
    /// Narrow terminals stack everything in one column.
    pub fn card_columns(&self, items: usize) -> usize {
        let max = match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 2,
            Breakpoint::Wide | Breakpoint::UltraWide => 3,
        };
        max.min(items).max(1)
    }

    /// Whether the header shows the section links
    pub fn shows_nav(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}

/// Width of the centered landing column for a terminal `width`
pub fn content_width(width: u16) -> u16 {
    const MAX_CONTENT: u16 = 120;
    width.saturating_sub(4).clamp(1, MAX_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Normal));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn cards_stack_on_narrow_terminals() {
        assert_eq!(Breakpoint::Compact.card_columns(3), 1);
        assert_eq!(Breakpoint::Normal.card_columns(3), 2);
        assert_eq!(Breakpoint::Wide.card_columns(3), 3);
        assert_eq!(Breakpoint::UltraWide.card_columns(4), 3);
        assert_eq!(Breakpoint::Wide.card_columns(2), 2);
        assert_eq!(Breakpoint::Wide.card_columns(0), 1);
    }

    #[test]
    fn nav_only_on_wide_headers() {
        assert!(!Breakpoint::Normal.shows_nav());
        assert!(Breakpoint::Wide.shows_nav());
    }

    #[test]
    fn content_column_is_capped() {
        assert_eq!(content_width(80), 76);
        assert_eq!(content_width(300), 120);
        assert_eq!(content_width(2), 1);
    }
}
