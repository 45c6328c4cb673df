//! Frame-sampled value animations used by rescale transitions.
//!
//! Each animated field owns at most one [`AnimationRecord`]. Starting a new
//! animation for a field replaces the in-flight record, so a superseded
//! animation can never mutate state again. Records are sampled by a single
//! [`RescaleAnimator::tick`] call per frame; nothing here waits or owns a
//! clock.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Value driven by a rescale transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimatedField {
    /// Multiplier (of main pane height) for outgoing grid lines.
    GridOffsetA,
    /// Multiplier (of main pane height) for incoming grid lines.
    GridOffsetB,
    /// Pixels per value unit of the main pane.
    VerticalScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress,
        }
    }
}

/// One interpolation from `from` to `to` over `duration_ms`.
///
/// The start time is anchored by the first tick that samples the record, so
/// animations requested from input handlers start on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub field: AnimatedField,
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub started_at_ms: Option<f64>,
    pub easing: Easing,
    last_value: f64,
}

impl AnimationRecord {
    #[must_use]
    pub fn new(field: AnimatedField, from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            field,
            from,
            to,
            duration_ms,
            started_at_ms: None,
            easing: Easing::Linear,
            last_value: from,
        }
    }

    /// Linear progress in `[0, 1]`; 0 until anchored.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        match self.started_at_ms {
            Some(start) => ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    #[must_use]
    pub fn finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    #[must_use]
    pub fn position(&self, now_ms: f64) -> f64 {
        if self.finished(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Value produced by the most recent tick (or `from` before the first).
    #[must_use]
    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

/// Value of one field at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSample {
    pub field: AnimatedField,
    pub value: f64,
    pub finished: bool,
}

pub type TickSamples = SmallVec<[AnimationSample; 3]>;

/// Scheduler for the per-field animation records of a rescale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescaleAnimator {
    records: IndexMap<AnimatedField, AnimationRecord>,
}

impl RescaleAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `record`, returning the record it superseded.
    pub fn start(&mut self, record: AnimationRecord) -> Option<AnimationRecord> {
        let superseded = self.records.insert(record.field, record);
        if superseded.is_some() {
            trace!(field = ?record.field, "superseding in-flight animation");
        }
        superseded
    }

    /// Drops the record for `field`; returns `true` when one was active.
    pub fn cancel(&mut self, field: AnimatedField) -> bool {
        self.records.shift_remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn is_active(&self, field: AnimatedField) -> bool {
        self.records.contains_key(&field)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn record(&self, field: AnimatedField) -> Option<&AnimationRecord> {
        self.records.get(&field)
    }

    /// Current value of an active field.
    #[must_use]
    pub fn current_value(&self, field: AnimatedField) -> Option<f64> {
        self.records.get(&field).map(AnimationRecord::last_value)
    }

    /// Samples every active record at `now_ms` and retires finished ones.
    ///
    /// A finished record reports its exact target value once, then is gone.
    /// Non-finite timestamps sample nothing.
    pub fn tick(&mut self, now_ms: f64) -> TickSamples {
        let mut samples = TickSamples::new();
        if !now_ms.is_finite() {
            return samples;
        }

        for record in self.records.values_mut() {
            let start = *record.started_at_ms.get_or_insert(now_ms);
            let value = record.position(now_ms);
            record.last_value = value;
            samples.push(AnimationSample {
                field: record.field,
                value,
                finished: record.finished(now_ms),
            });
            trace!(field = ?record.field, value, start, "animation tick");
        }

        self.records.retain(|_, record| !record.finished(now_ms));
        samples
    }
}
