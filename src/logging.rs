/// Initialize structured logging with tracing.
/// Call once at startup; later calls are ignored.
///
/// `RUST_LOG` overrides the default `info` filter. With `json` set, events are
/// emitted as JSON lines like the rest of our tooling expects; otherwise a
/// compact human format goes to stderr.
pub fn init_logging(json: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json()
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact()
            )
            .try_init()
    };

    match result {
        Ok(()) => tracing::debug!(json = json, "Structured logging initialized"),
        Err(e) => tracing::debug!(error = %e, "Logging already initialized"),
    }
}
