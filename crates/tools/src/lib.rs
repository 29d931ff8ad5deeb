//! Quokka Tools
//!
//! CLI tools for working with qk sources.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
/// Default is `info` with `debug` for the tools themselves.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quokka_tools=debug,quokka_qk=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
