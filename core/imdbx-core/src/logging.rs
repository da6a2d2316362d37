//! Logging utilities for imdbx
//!
//! Installs a `tracing` subscriber. Loads emit one `info` summary per file and `debug`
//! progress lines every `IngestConfig::progress_interval` rows.

#[cfg(feature = "logging")]
use tracing_subscriber::{EnvFilter, fmt, fmt::format::FmtSpan};

/// Default filter: load summaries from this crate, warnings from everything else.
pub const DEFAULT_FILTER: &str = "warn,imdbx_core=info";

/// Initialize logging with default settings
///
/// # Environment Variables
/// - `RUST_LOG` - Log level filter (default: [`DEFAULT_FILTER`])
///
/// # Example
/// ```rust
/// imdbx_core::logging::init();
/// ```
#[cfg(feature = "logging")]
pub fn init() {
    init_with_level(DEFAULT_FILTER)
}

/// Initialize logging with a specific level or filter directive
///
/// `RUST_LOG` still wins when set. Calling this twice is harmless; the second call
/// leaves the first subscriber in place.
///
/// # Example
/// ```rust
/// imdbx_core::logging::init_with_level("imdbx_core=debug");
/// ```
#[cfg(feature = "logging")]
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Initialize logging for tests
///
/// Debug level, captured by the test harness.
#[cfg(feature = "logging")]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("imdbx_core=debug"))
        .with_test_writer()
        .try_init();
}

// Stub implementations when logging feature is disabled
#[cfg(not(feature = "logging"))]
pub fn init() {}

#[cfg(not(feature = "logging"))]
pub fn init_with_level(_level: &str) {}

#[cfg(not(feature = "logging"))]
pub fn init_test() {}
