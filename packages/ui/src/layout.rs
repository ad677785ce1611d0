//! Viewport-derived layout mode.

/// Widest viewport, in logical pixels, that still renders the compact variant.
pub const COMPACT_MAX_WIDTH: f64 = 600.0;

/// Sizing variant of the dialog, derived from the current viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    #[default]
    Wide,
}

impl LayoutMode {
    /// Layout mode for a viewport of `width` logical pixels. The boundary is inclusive.
    pub fn for_width(width: f64) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::Compact
    }
}
