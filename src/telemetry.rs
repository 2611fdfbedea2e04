//! Opt-in log output for hosts that do not install their own subscriber.
//!
//! Library code only emits `tracing` events; nothing is printed until a host
//! either calls one of these helpers (with the `telemetry` feature) or wires
//! its own subscriber.

/// Directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "statviz=info";

/// [`init_tracing`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins over `fallback`. Returns `false` without installing
/// anything when the `telemetry` feature is off, when `fallback` is not a
/// valid filter, or when the process already has a global subscriber.
#[must_use]
pub fn init_tracing(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn nothing_is_installed_without_feature() {
        assert!(!super::init_default_tracing());
        assert!(!init_tracing("statviz=debug"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn only_one_global_subscriber_is_installed() {
        let _ = init_tracing("statviz=debug");
        assert!(!init_tracing("statviz=trace"));
    }
}
