use eyre::{
    Context as _,
    Result,
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

const VERBOSE_DIRECTIVES: &str = "warn,playlist_stats=debug,playlist_stats_config=debug,youtube_client=debug";

/// Logs go to stderr; stdout is reserved for the report.
///
/// `RUST_LOG` takes precedence. Without it only warnings are shown, unless `verbose` is set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(if verbose { VERBOSE_DIRECTIVES } else { "warn" })
            .context("Failed to parse log filter")?,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .context("Failed to initialize tracing subscriber")
}
