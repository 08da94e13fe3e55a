//! Startup settings for the chatbot.
//!
//! Settings are resolved once from the process environment, overlaid on an
//! optional [`DEFAULT_ENV_FILE`], and validated before being handed to the
//! rest of the application.
//!
//! When debug mode is on (the default), the instance credentials and all
//! nine sample media links must be available. A missing OpenAI key only
//! produces a warning.

mod schema;
mod validate;

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::config::{Config, ConfigError, FieldSpec, Schema, Warning};

/// Env file read at startup, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = "config/.env";

/// Resolved startup settings.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Enables local development against fixed sample credentials and media.
    pub debug: bool,

    pub debug_user_id: String,
    pub debug_api_token_id: String,

    pub debug_link_greenapi_ru: String,
    pub debug_link_greenapi_en: String,
    pub debug_link_python_chatbot: String,
    pub debug_link_pdf: String,
    pub debug_link_jpg: String,
    pub debug_link_audio_ru: String,
    pub debug_link_audio_en: String,
    pub debug_link_video_ru: String,
    pub debug_link_video_en: String,

    /// Empty when ChatGPT features are unavailable.
    pub openai_api_key: String,

    pub app_name: String,
    pub active_profile: String,
    pub spring_cloud_config_uri: String,
    pub link_preview: bool,
}

impl Settings {
    /// Debug media links paired with the variable each one is read from.
    pub fn debug_links(&self) -> [(&'static str, &str); 9] {
        [
            ("DEBUG_LINK_GREENAPI_RU", &self.debug_link_greenapi_ru),
            ("DEBUG_LINK_GREENAPI_EN", &self.debug_link_greenapi_en),
            ("DEBUG_LINK_PYTHON_CHATBOT", &self.debug_link_python_chatbot),
            ("DEBUG_LINK_PDF", &self.debug_link_pdf),
            ("DEBUG_LINK_JPG", &self.debug_link_jpg),
            ("DEBUG_LINK_AUDIO_RU", &self.debug_link_audio_ru),
            ("DEBUG_LINK_AUDIO_EN", &self.debug_link_audio_en),
            ("DEBUG_LINK_VIDEO_RU", &self.debug_link_video_ru),
            ("DEBUG_LINK_VIDEO_EN", &self.debug_link_video_en),
        ]
    }
}

impl Schema for Settings {
    const FIELDS: &'static [FieldSpec] = schema::FIELDS;

    fn validate(&self) -> Result<Vec<Warning>, ConfigError> {
        validate::validate(self)
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("debug", &self.debug)
            .field("debug_user_id", &self.debug_user_id)
            .field("debug_api_token_id", &redact(&self.debug_api_token_id))
            .field("debug_link_greenapi_ru", &self.debug_link_greenapi_ru)
            .field("debug_link_greenapi_en", &self.debug_link_greenapi_en)
            .field("debug_link_python_chatbot", &self.debug_link_python_chatbot)
            .field("debug_link_pdf", &self.debug_link_pdf)
            .field("debug_link_jpg", &self.debug_link_jpg)
            .field("debug_link_audio_ru", &self.debug_link_audio_ru)
            .field("debug_link_audio_en", &self.debug_link_audio_en)
            .field("debug_link_video_ru", &self.debug_link_video_ru)
            .field("debug_link_video_en", &self.debug_link_video_en)
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("app_name", &self.app_name)
            .field("active_profile", &self.active_profile)
            .field("spring_cloud_config_uri", &self.spring_cloud_config_uri)
            .field("link_preview", &self.link_preview)
            .finish()
    }
}

/// Loads settings from [`DEFAULT_ENV_FILE`] (if present) and the process environment.
///
/// Environment variables take precedence over values from the file.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(DEFAULT_ENV_FILE)
}

pub(crate) fn load_settings_from(env_file: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    Config::builder()
        .with_env_file(env_file, false)
        .with_env()
        .build()
}
