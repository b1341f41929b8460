pub mod build_info;
pub mod fs;
pub mod paths;

use std::sync::Once;

use tracing::level_filters::LevelFilter;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr so shell output stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
