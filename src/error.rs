use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the chatbot-settings library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}
