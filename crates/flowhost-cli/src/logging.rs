use tracing_subscriber::EnvFilter;

/// Structured logging for the CLI: a `RUST_LOG` filter wins, otherwise the
/// `--log-level` flag supplies the default directive.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
