//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub default_filter: String,
    /// JSON lines when set, human-readable text otherwise.
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            json: true,
        }
    }
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Install the global subscriber. Returns `false` when one was already set.
pub fn init(config: &TracingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Text output captured by the test harness, `debug` unless `RUST_LOG` says otherwise.
pub fn init_for_tests() {
    let config = TracingConfig {
        default_filter: "debug".to_string(),
        json: false,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_test_writer()
        .with_target(false)
        .try_init();
}
