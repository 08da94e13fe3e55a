//! Resolution of raw variables against a field schema.
//!
//! Each declared field takes its variable's value when present and its
//! default otherwise, then is coerced to the declared kind.

use toml::{Table, Value};

use super::schema::{FieldKind, FieldSpec};
use super::source::RawVars;
use super::ConfigError;

/// Resolves every field in `fields` into a table keyed by field name.
pub fn resolve_fields(fields: &[FieldSpec], vars: &RawVars) -> Result<Table, ConfigError> {
    let mut table = Table::new();

    for spec in fields {
        let value = match spec.kind {
            FieldKind::Str => Value::String(
                vars.get(spec.env)
                    .cloned()
                    .unwrap_or_else(|| spec.default.to_string()),
            ),
            FieldKind::Bool => {
                // An empty boolean is rejected, not defaulted
                let raw = vars.get(spec.env).map(|v| v.trim()).unwrap_or(spec.default);
                let parsed = parse_bool(raw).ok_or_else(|| ConfigError::InvalidBool {
                    var: spec.env,
                    value: raw.to_string(),
                })?;
                Value::Boolean(parsed)
            }
        };
        table.insert(spec.name.to_string(), value);
    }

    Ok(table)
}

/// Parses a boolean token, ignoring case and surrounding whitespace.
pub fn parse_bool(s: &str) -> Option<bool> {
    const TRUE: [&str; 6] = ["true", "1", "yes", "on", "t", "y"];
    const FALSE: [&str; 6] = ["false", "0", "no", "off", "f", "n"];

    let s = s.trim();
    if TRUE.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE.iter().any(|f| s.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
