use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "noteful_api=info,tower_http=info";

/// Install the global fmt subscriber on stderr. `RUST_LOG` wins over the
/// default filter.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
