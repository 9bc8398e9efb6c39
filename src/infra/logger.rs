// src/infra/logger.rs — Structured logging with tracing
//
// Filter precedence: TUTOR_LOG, then RUST_LOG, then the given default
// level. TUTOR_LOG exists so tutor diagnostics can be turned up without
// making every other Rust tool on the box chatty.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(level: &str) {
    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .compact()
        .init();
}

fn env_filter(level: &str) -> EnvFilter {
    if let Ok(spec) = std::env::var("TUTOR_LOG") {
        return EnvFilter::new(spec);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
