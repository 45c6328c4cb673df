use serde::{Deserialize, Serialize};

/// Pixel dimensions of one pane or of the whole widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneSize {
    pub width: u32,
    pub height: u32,
}

impl PaneSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// One projected sample in pane-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which drawable region a viewport feeds.
///
/// Both panes share the same projection code. Only the main pane drives grid
/// rescaling and only the overview is hit-tested by the selection band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneRole {
    /// Large chart showing the selected sub-range.
    Main,
    /// Miniature strip showing the whole dataset under the selection band.
    Overview,
}
