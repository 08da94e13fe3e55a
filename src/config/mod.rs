//! Configuration loading from layered variable sources.

mod builder;
mod env;
mod error;
mod file;
mod resolve;
mod schema;
mod source;

pub use builder::Config;
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::EnvFileSource;
pub use resolve::parse_bool;
pub use schema::{FieldKind, FieldSpec, Schema, Warning};
pub use source::{ConfigSource, MapSource, RawVars};
