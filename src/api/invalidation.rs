use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::ChartController;

/// Region whose geometry changed since the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    MainPane,
    Overview,
    Grid,
    Selection,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::MainPane => 1 << 0,
            Self::Overview => 1 << 1,
            Self::Grid => 1 << 2,
            Self::Selection => 1 << 3,
        }
    }
}

/// Bitmask of pending redraw topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::MainPane.bit()
        | InvalidationTopic::Overview.bit()
        | InvalidationTopic::Grid.bit()
        | InvalidationTopic::Selection.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl<R: Renderer> ChartController<R> {
    /// Topics changed since the last render or `take_invalidation` call.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.invalidation
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !self.invalidation.is_none()
    }

    /// Returns and clears pending topics, for hosts that schedule their own
    /// redraws instead of calling [`ChartController::render`].
    pub fn take_invalidation(&mut self) -> InvalidationTopics {
        std::mem::take(&mut self.invalidation)
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.invalidation = self.invalidation.with_topic(topic);
    }

    pub(super) fn invalidate_all(&mut self) {
        self.invalidation = InvalidationTopics::all();
    }
}
