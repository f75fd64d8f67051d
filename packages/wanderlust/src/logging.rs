use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WANDERLUST_LOG";

/// Install the global subscriber. The filter is read from `WANDERLUST_LOG` and defaults to `info`.
///
/// Logs go to stderr, so stdout only carries rendered pages.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
