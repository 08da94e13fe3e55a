//! Declarative description of a settings record.

use serde::de::DeserializeOwned;

use super::ConfigError;

/// Target type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Str,
}

/// One declared field: where its value comes from and what it falls back to.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name in the deserialized record.
    pub name: &'static str,
    /// Environment variable holding the raw value.
    pub env: &'static str,
    pub kind: FieldKind,
    /// Raw value used when the variable is absent.
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn boolean(name: &'static str, env: &'static str, default: bool) -> Self {
        Self {
            name,
            env,
            kind: FieldKind::Bool,
            default: if default { "true" } else { "false" },
        }
    }

    pub const fn string(name: &'static str, env: &'static str, default: &'static str) -> Self {
        Self {
            name,
            env,
            kind: FieldKind::Str,
            default,
        }
    }
}

/// A non-fatal finding from validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Variable the warning is about.
    pub var: &'static str,
    pub message: &'static str,
}

/// A record that can be built by [`Config::build`](super::Config::build).
pub trait Schema: DeserializeOwned {
    /// Fields resolved from the merged sources, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Cross-field checks run once after resolution.
    ///
    /// Fatal problems are returned as errors; soft ones as warnings.
    fn validate(&self) -> Result<Vec<Warning>, ConfigError>;
}
