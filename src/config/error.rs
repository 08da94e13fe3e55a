use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required env file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read env file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("failed to parse env file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("invalid boolean in {var}: '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),

    #[error(
        "when debug mode is enabled, you must pass both instance credentials \
         in DEBUG_USER_ID and DEBUG_API_TOKEN_ID envs"
    )]
    MissingDebugCredentials,

    #[error(
        "when debug mode is enabled, you must pass all required links \
         for correct bot functionality (empty: {})",
        .missing.join(", ")
    )]
    MissingDebugLinks { missing: Vec<&'static str> },
}
