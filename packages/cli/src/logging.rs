// ABOUTME: Tracing subscriber setup for the server binary
// ABOUTME: RUST_LOG wins over the configured filter when both are present

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: RUST_LOG first, then the configured default.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(todoboard_config::DEFAULT_LOG_FILTER))
}

pub fn init_tracing(configured: &str) {
    // try_init so a second call (tests, embedding) is a no-op instead of a panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_target(false)
        .compact()
        .try_init();
}
