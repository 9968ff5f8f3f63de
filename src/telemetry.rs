//! Tracing bootstrap for hosts embedding the radar engine.
//!
//! Subscriber setup stays opt-in: the engine only emits `debug`/`trace`
//! events (preset application, render passes) and never installs a
//! subscriber on its own. Hosts either call `init_default_tracing` or wire
//! their own subscriber and filters.

/// Installs a compact stderr `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Honors `RUST_LOG` when set; otherwise defaults to `radar_rs=debug` so
/// the engine's preset and render events are visible out of the box.
/// Returns `false` when the feature is disabled or the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("radar_rs=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
