//! Telemetry helpers for hosts embedding `range-chart`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` is a convenience for demos and tests.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "range_chart=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
