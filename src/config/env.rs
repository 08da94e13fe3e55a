use super::source::{normalize_key, ConfigSource, RawVars};
use super::ConfigError;

/// The process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn vars(&self) -> Result<RawVars, ConfigError> {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .map(|(key, value)| (normalize_key(&key), value))
            .collect();

        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_reads_process_env() {
        std::env::set_var("chatbot_settings_env_source_probe", "present");

        let vars = EnvSource.vars().unwrap();

        assert_eq!(
            vars.get("CHATBOT_SETTINGS_ENV_SOURCE_PROBE").map(String::as_str),
            Some("present")
        );
    }
}
