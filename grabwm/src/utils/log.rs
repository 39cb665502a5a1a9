use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald")]
mod journald;

/// Installs the global subscriber. The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// Will error if a global subscriber is already set.
pub fn setup_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing::subscriber::set_global_default(get_subscribers(filter))?;
    Ok(())
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}
