pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, writing to stderr so command output stays clean.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
