pub mod config;
pub mod context;
mod error;
pub mod settings;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use config::{Config, ConfigError};
pub use context::AppContext;
pub use error::Error;
pub use settings::{load_settings, Settings};
