//! Diagnostics go to stderr so that `list --json` output stays machine readable.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const CRATE_TARGET: &str = "fundbazaar";

/// Filter directives for the subscriber. A set `RUST_LOG` wins; otherwise this crate
/// logs errors only, or everything from debug up when `verbose`.
pub fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose {
        format!("{CRATE_TARGET}=debug")
    } else {
        format!("{CRATE_TARGET}=error")
    };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref());

    let stderr_layer = fmt::layer()
        .pretty()
        .without_time()
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();
}
