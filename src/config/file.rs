//! Dotenv file configuration source.

use std::path::{Path, PathBuf};

use super::source::{normalize_key, ConfigSource, RawVars};
use super::ConfigError;

/// A configuration source that loads `NAME=value` lines from a dotenv file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
/// Quoting, comments, `export` prefixes and `${VAR}` substitution follow
/// the usual dotenv rules.
#[derive(Debug, Clone)]
pub struct EnvFileSource {
    path: PathBuf,
    required: bool,
}

impl EnvFileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, the build will fail if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for EnvFileSource {
    fn vars(&self) -> Result<RawVars, ConfigError> {
        let lines = match dotenvy::from_path_iter(&self.path) {
            Ok(lines) => lines,
            Err(e) if e.not_found() => {
                return if self.required {
                    Err(ConfigError::FileNotFound(self.path.clone()))
                } else {
                    tracing::debug!(path = %self.path.display(), "optional env file not found");
                    Ok(RawVars::new())
                };
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let mut vars = RawVars::new();
        for line in lines {
            let (key, value) = line.map_err(|e| ConfigError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
            vars.insert(normalize_key(&key), value);
        }

        tracing::debug!(path = %self.path.display(), count = vars.len(), "loaded env file");
        Ok(vars)
    }

    fn reports_unknown_keys(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# local overrides").unwrap();
        writeln!(file, "DEBUG_USER_ID=1101000001").unwrap();
        writeln!(file, "app_name=\"my bot\"").unwrap();

        let source = EnvFileSource::new(file.path(), true);
        let vars = source.vars().unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("DEBUG_USER_ID").map(String::as_str), Some("1101000001"));
        assert_eq!(vars.get("APP_NAME").map(String::as_str), Some("my bot"));
    }

    #[test]
    fn test_file_source_required_missing() {
        let source = EnvFileSource::new("/nonexistent/path/config/.env", true);
        let result = source.vars();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let source = EnvFileSource::new("/nonexistent/path/config/.env", false);
        let vars = source.vars().unwrap();

        assert!(vars.is_empty());
    }

    #[test]
    fn test_file_source_malformed_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not a dotenv line").unwrap();

        let source = EnvFileSource::new(file.path(), true);
        let result = source.vars();

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
