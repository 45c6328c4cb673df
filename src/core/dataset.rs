use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_millis_to_seconds};
use crate::error::{ChartError, ChartResult};

/// Identifies one of the two value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesId {
    A,
    B,
}

impl SeriesId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

/// Display metadata attached to one series.
///
/// `kind` is an opaque type tag from the data feed; the engine never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub kind: String,
}

impl SeriesMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            kind: String::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// Raw record handed over by an external loader.
///
/// This is the input contract; [`Dataset::try_from`] validates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetSource {
    pub times: Vec<i64>,
    pub series_a: Vec<i64>,
    pub series_b: Vec<i64>,
    pub meta_a: SeriesMeta,
    pub meta_b: SeriesMeta,
    #[serde(default)]
    pub time_kind: String,
}

/// Immutable, validated two-series time dataset.
///
/// Invariants:
/// - `times`, `series_a` and `series_b` have the same length, at least 2
/// - `times` is strictly increasing
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    times: Vec<i64>,
    series_a: Vec<i64>,
    series_b: Vec<i64>,
    meta_a: SeriesMeta,
    meta_b: SeriesMeta,
    time_kind: String,
    min_a: i64,
    max_a: i64,
    min_b: i64,
    max_b: i64,
}

impl Dataset {
    pub fn new(source: DatasetSource) -> ChartResult<Self> {
        let DatasetSource {
            times,
            series_a,
            series_b,
            meta_a,
            meta_b,
            time_kind,
        } = source;

        if times.len() < 2 {
            return Err(ChartError::InvalidDataset(format!(
                "dataset needs at least 2 samples, got {}",
                times.len()
            )));
        }
        if series_a.len() != times.len() || series_b.len() != times.len() {
            return Err(ChartError::InvalidDataset(format!(
                "series lengths must match time axis: times={}, a={}, b={}",
                times.len(),
                series_a.len(),
                series_b.len()
            )));
        }
        if let Some(index) = times.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidDataset(format!(
                "times must be strictly increasing (violated at index {})",
                index + 1
            )));
        }

        let (min_a, max_a) = min_max(&series_a);
        let (min_b, max_b) = min_max(&series_b);

        // Spans and extents are plain i64 differences downstream.
        if times[times.len() - 1].checked_sub(times[0]).is_none() {
            return Err(ChartError::InvalidDataset(
                "time span overflows i64".to_owned(),
            ));
        }
        let value_floor = min_a.min(min_b).min(0);
        let value_ceiling = max_a.max(max_b);
        if max_a.checked_sub(min_a).is_none()
            || max_b.checked_sub(min_b).is_none()
            || value_ceiling.checked_sub(value_floor).is_none()
        {
            return Err(ChartError::InvalidDataset(
                "value extent overflows i64".to_owned(),
            ));
        }

        Ok(Self {
            times,
            series_a,
            series_b,
            meta_a,
            meta_b,
            time_kind,
            min_a,
            max_a,
            min_b,
            max_b,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    #[must_use]
    pub fn values(&self, series: SeriesId) -> &[i64] {
        match series {
            SeriesId::A => &self.series_a,
            SeriesId::B => &self.series_b,
        }
    }

    #[must_use]
    pub fn meta(&self, series: SeriesId) -> &SeriesMeta {
        match series {
            SeriesId::A => &self.meta_a,
            SeriesId::B => &self.meta_b,
        }
    }

    #[must_use]
    pub fn time_kind(&self) -> &str {
        &self.time_kind
    }

    #[must_use]
    pub fn min_time(&self) -> i64 {
        self.times[0]
    }

    #[must_use]
    pub fn max_time(&self) -> i64 {
        self.times[self.times.len() - 1]
    }

    /// `max_time - min_time`; always >= 1 for a valid dataset.
    #[must_use]
    pub fn time_span(&self) -> i64 {
        self.max_time() - self.min_time()
    }

    #[must_use]
    pub fn global_min(&self) -> i64 {
        self.min_a.min(self.min_b)
    }

    #[must_use]
    pub fn global_max(&self) -> i64 {
        self.max_a.max(self.max_b)
    }

    #[must_use]
    pub fn diff(&self, series: SeriesId) -> i64 {
        match series {
            SeriesId::A => self.max_a - self.min_a,
            SeriesId::B => self.max_b - self.min_b,
        }
    }

    /// Value extent measured from the zero baseline the panes project from.
    ///
    /// Never below 1 so it can be used as a divisor.
    #[must_use]
    pub fn value_diff(&self) -> i64 {
        (self.global_max() - self.global_min().min(0)).max(1)
    }

    /// Maximum over both series for the inclusive index window `[from, to]`.
    #[must_use]
    pub fn window_max(&self, from: usize, to: usize) -> Option<i64> {
        if from > to || to >= self.len() {
            return None;
        }
        let max_a = self.series_a[from..=to].iter().copied().max();
        let max_b = self.series_b[from..=to].iter().copied().max();
        max_a.max(max_b)
    }
}

impl TryFrom<DatasetSource> for Dataset {
    type Error = ChartError;

    fn try_from(source: DatasetSource) -> ChartResult<Self> {
        Self::new(source)
    }
}

/// Incremental builder used by loaders that stream samples.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    source: DatasetSource,
}

impl DatasetBuilder {
    #[must_use]
    pub fn new(meta_a: SeriesMeta, meta_b: SeriesMeta) -> Self {
        Self {
            source: DatasetSource {
                meta_a,
                meta_b,
                ..DatasetSource::default()
            },
        }
    }

    #[must_use]
    pub fn with_time_kind(mut self, kind: impl Into<String>) -> Self {
        self.source.time_kind = kind.into();
        self
    }

    pub fn push_sample(&mut self, time: i64, value_a: i64, value_b: i64) -> &mut Self {
        self.source.times.push(time);
        self.source.series_a.push(value_a);
        self.source.series_b.push(value_b);
        self
    }

    pub fn push_datetime_sample(
        &mut self,
        time: DateTime<Utc>,
        value_a: i64,
        value_b: i64,
    ) -> &mut Self {
        self.push_sample(datetime_to_unix_seconds(time), value_a, value_b)
    }

    /// Pushes a sample stamped in unix milliseconds, as chart feeds publish them.
    pub fn push_millis_sample(&mut self, millis: i64, value_a: i64, value_b: i64) -> &mut Self {
        self.push_sample(unix_millis_to_seconds(millis), value_a, value_b)
    }

    pub fn build(self) -> ChartResult<Dataset> {
        Dataset::new(self.source)
    }
}

fn min_max(values: &[i64]) -> (i64, i64) {
    values
        .iter()
        .fold((i64::MAX, i64::MIN), |(min, max), &value| {
            (min.min(value), max.max(value))
        })
}
