use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors surfaced to callers of the chart engine.
///
/// Load-time, configuration and draw-frame problems are reported here. Geometry
/// recomputation driven by pointer events or animation ticks never fails; it
/// reports recovered conditions through [`crate::core::RecomputeOutcome`].
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
