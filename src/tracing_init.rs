//! Tracing initialization for the CLI binary.

/// Initialize a stderr subscriber with env-filter support
/// (`RUST_LOG=fitmarket=debug`). Defaults to `warn` so silent-log
/// failures stay quiet unless asked for.
pub fn init() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
