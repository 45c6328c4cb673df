use serde::{Deserialize, Serialize};

mod range_selector;

pub use range_selector::RangeSelector;

/// Pixel tolerance around band edges used by the default configuration.
pub const DEFAULT_TOUCH_DELTA_PX: f64 = 20.0;

/// Gesture state of the overview selection band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    DraggingCenter,
    DraggingLeftEdge,
    DraggingRightEdge,
}

impl SelectionState {
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Part of the band hit by a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    Center,
    LeftEdge,
    RightEdge,
}

/// Active drag with the offsets captured at gesture start.
///
/// Moves are always derived from these captured values and the latest
/// pointer position, never accumulated from previous moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragGesture {
    /// `offset` is pointer x minus band left; `width` is the band width.
    Center { offset: f64, width: f64 },
    /// `offset` is pointer x minus band left.
    LeftEdge { offset: f64 },
    /// `offset` is pointer x minus band right.
    RightEdge { offset: f64 },
}

impl DragGesture {
    #[must_use]
    pub const fn state(self) -> SelectionState {
        match self {
            Self::Center { .. } => SelectionState::DraggingCenter,
            Self::LeftEdge { .. } => SelectionState::DraggingLeftEdge,
            Self::RightEdge { .. } => SelectionState::DraggingRightEdge,
        }
    }
}

/// Selection band in overview-pane pixels, `0 <= left < right <= width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBand {
    pub left: f64,
    pub right: f64,
}

impl SelectionBand {
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }
}

/// Host input delivered to the controller, in widget-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerCancel,
    Resize { width: u32, height: u32 },
}
