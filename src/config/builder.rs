use std::path::Path;

use super::env::EnvSource;
use super::file::EnvFileSource;
use super::resolve::resolve_fields;
use super::schema::{FieldSpec, Schema};
use super::source::{ConfigSource, MapSource, RawVars};
use super::ConfigError;

/// Builder for loading a settings record from layered variable sources.
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones on a per-variable basis. Variable names are matched
/// case-insensitively.
///
/// ## Example
///
/// ```no_run
/// use chatbot_settings::{Config, Settings};
///
/// // file values act as defaults, the process environment wins
/// let settings: Settings = Config::builder()
///     .with_env_file("config/.env", false)
///     .with_env()
///     .build()?;
/// # Ok::<(), chatbot_settings::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a dotenv file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_env_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(EnvFileSource::new(path, required))
    }

    /// Adds the process environment.
    pub fn with_env(self) -> Self {
        self.with_source(EnvSource)
    }

    /// Adds a fixed set of variables.
    ///
    /// ```
    /// use chatbot_settings::{Config, Settings};
    ///
    /// let settings: Settings = Config::builder()
    ///     .with_vars([("DEBUG", "false"), ("APP_NAME", "demo")])
    ///     .build()?;
    /// assert_eq!(settings.app_name, "demo");
    /// # Ok::<(), chatbot_settings::ConfigError>(())
    /// ```
    pub fn with_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.with_source(MapSource::new(vars))
    }

    /// Adds an arbitrary source.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Reads every source and merges the results.
    pub fn collect(&self) -> Result<RawVars, ConfigError> {
        self.merge(&[])
    }

    fn merge(&self, fields: &[FieldSpec]) -> Result<RawVars, ConfigError> {
        let mut merged = RawVars::new();
        for source in &self.sources {
            let vars = source.vars()?;
            if source.reports_unknown_keys() && !fields.is_empty() {
                for key in vars.keys() {
                    if !fields.iter().any(|spec| spec.env == key.as_str()) {
                        tracing::debug!(?source, key = %key, "ignoring unknown variable");
                    }
                }
            }
            merged.extend(vars);
        }
        Ok(merged)
    }

    /// Builds the record by merging, resolving, deserializing and validating.
    ///
    /// Validation warnings are logged and do not fail the build.
    pub fn build<T: Schema>(self) -> Result<T, ConfigError> {
        let merged = self.merge(T::FIELDS)?;

        let table = resolve_fields(T::FIELDS, &merged)?;
        let record: T = toml::Value::Table(table).try_into()?;

        for warning in record.validate()? {
            tracing::warn!(var = warning.var, "{}", warning.message);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use crate::Settings;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_later_sources_override_earlier() {
        let config = Config::builder()
            .with_vars([("APP_NAME", "first"), ("ACTIVE_PROFILE", "dev")])
            .with_vars([("app_name", "second")]);

        let merged = config.collect().unwrap();

        assert_eq!(merged.get("APP_NAME").map(String::as_str), Some("second"));
        assert_eq!(merged.get("ACTIVE_PROFILE").map(String::as_str), Some("dev"));
    }

    #[test]
    fn test_env_file_is_overridden_by_later_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "APP_NAME=from-file").unwrap();
        writeln!(file, "ACTIVE_PROFILE=staging").unwrap();

        let merged = Config::builder()
            .with_env_file(file.path(), true)
            .with_vars([("APP_NAME", "from-env")])
            .collect()
            .unwrap();

        assert_eq!(merged.get("APP_NAME").map(String::as_str), Some("from-env"));
        assert_eq!(merged.get("ACTIVE_PROFILE").map(String::as_str), Some("staging"));
    }

    #[test]
    fn test_source_error_propagates() {
        let result = Config::builder()
            .with_env_file("/nonexistent/config/.env", true)
            .collect();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_unknown_env_file_keys_are_logged() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DEBUG=false").unwrap();
        writeln!(file, "DEBUG_LINK_JPEG=https://example.com/dog.jpg").unwrap();

        let (result, logs) = capture_logs(|| {
            Config::builder()
                .with_env_file(file.path(), true)
                .build::<Settings>()
        });

        assert!(result.is_ok());
        assert_eq!(logs.matches("ignoring unknown variable").count(), 1);
        assert!(logs.contains("key=DEBUG_LINK_JPEG"));
    }

    #[test]
    fn test_unknown_keys_from_vars_are_not_logged() {
        let (result, logs) = capture_logs(|| {
            Config::builder()
                .with_vars([("DEBUG", "false"), ("HOME", "/root")])
                .build::<Settings>()
        });

        assert!(result.is_ok());
        assert!(!logs.contains("ignoring unknown variable"));
    }
}
