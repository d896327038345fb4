//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a global subscriber filtered by `CCHECK_LOG` (falling back to
/// `RUST_LOG`, then `info`). Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CCHECK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
