//! Debug-mode consistency checks.

use super::Settings;
use crate::config::{ConfigError, Warning};

pub(super) fn validate(settings: &Settings) -> Result<Vec<Warning>, ConfigError> {
    if settings.debug {
        if settings.debug_user_id.is_empty() && settings.debug_api_token_id.is_empty() {
            return Err(ConfigError::MissingDebugCredentials);
        }

        let missing: Vec<&'static str> = settings
            .debug_links()
            .into_iter()
            .filter(|(_, link)| link.is_empty())
            .map(|(var, _)| var)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingDebugLinks { missing });
        }
    }

    let mut warnings = Vec::new();
    if settings.openai_api_key.is_empty() {
        warnings.push(Warning {
            var: "OPENAI_API_KEY",
            message: "OpenAI API key is not set. ChatGPT functionality will not work properly.",
        });
    }

    Ok(warnings)
}
