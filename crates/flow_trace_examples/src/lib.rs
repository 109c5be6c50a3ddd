#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber for the example binaries.
///
/// Respects `RUST_LOG` when set and defaults to `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
