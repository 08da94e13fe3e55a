use std::collections::BTreeMap;

use super::ConfigError;

/// Raw variables gathered from a source, keyed by upper-cased name.
pub type RawVars = BTreeMap<String, String>;

pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn vars(&self) -> Result<RawVars, ConfigError>;

    /// Whether keys outside the schema are logged when this source is merged.
    ///
    /// Off for sources like the process environment, which carry many unrelated variables.
    fn reports_unknown_keys(&self) -> bool {
        false
    }
}

/// Variable names are matched case-insensitively.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_uppercase()
}

/// A fixed set of variables, used to build settings from a synthetic environment.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: RawVars,
}

impl MapSource {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (normalize_key(key.as_ref()), value.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn vars(&self) -> Result<RawVars, ConfigError> {
        Ok(self.vars.clone())
    }
}
