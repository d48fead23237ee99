use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::NodeError;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`;
/// events go to stderr so stdout carries command output only.
pub fn init_logging(default_filter: &str) -> Result<(), NodeError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| NodeError::Logging(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| NodeError::Logging(e.to_string()))
}
