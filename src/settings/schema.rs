//! Field table for [`Settings`](super::Settings).

use crate::config::FieldSpec;

pub(super) const FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean("debug", "DEBUG", true),
    // Instance credentials, debug mode only
    FieldSpec::string("debug_user_id", "DEBUG_USER_ID", ""),
    FieldSpec::string("debug_api_token_id", "DEBUG_API_TOKEN_ID", ""),
    // Sample media, debug mode only
    FieldSpec::string(
        "debug_link_greenapi_ru",
        "DEBUG_LINK_GREENAPI_RU",
        "https://raw.githubusercontent.com/green-api/telegram-demo-chatbot-python/refs/heads/master/media/welcome_ru.png",
    ),
    FieldSpec::string(
        "debug_link_greenapi_en",
        "DEBUG_LINK_GREENAPI_EN",
        "https://raw.githubusercontent.com/green-api/telegram-demo-chatbot-python/refs/heads/master/media/welcome_en.png",
    ),
    FieldSpec::string(
        "debug_link_python_chatbot",
        "DEBUG_LINK_PYTHON_CHATBOT",
        "https://raw.githubusercontent.com/green-api/telegram-demo-chatbot-python/refs/heads/master/media/about.png",
    ),
    FieldSpec::string(
        "debug_link_pdf",
        "DEBUG_LINK_PDF",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/corgi.pdf",
    ),
    FieldSpec::string(
        "debug_link_jpg",
        "DEBUG_LINK_JPG",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/corgi.jpg",
    ),
    FieldSpec::string(
        "debug_link_audio_ru",
        "DEBUG_LINK_AUDIO_RU",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/Audio_bot.mp3",
    ),
    FieldSpec::string(
        "debug_link_audio_en",
        "DEBUG_LINK_AUDIO_EN",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/Audio_bot_eng.mp3",
    ),
    FieldSpec::string(
        "debug_link_video_ru",
        "DEBUG_LINK_VIDEO_RU",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/Video_bot_ru.mp4",
    ),
    FieldSpec::string(
        "debug_link_video_en",
        "DEBUG_LINK_VIDEO_EN",
        "https://storage.yandexcloud.net/sw-prod-03-test/ChatBot/Video_bot_eng.mp4",
    ),
    FieldSpec::string("openai_api_key", "OPENAI_API_KEY", ""),
    FieldSpec::string("app_name", "APP_NAME", "sw-chatbot-4100"),
    FieldSpec::string("active_profile", "ACTIVE_PROFILE", ""),
    FieldSpec::string("spring_cloud_config_uri", "SPRING_CLOUD_CONFIG_URI", ""),
    FieldSpec::boolean("link_preview", "LINK_PREVIEW", true),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_env_names_are_upper_case_field_names() {
        for spec in FIELDS {
            assert_eq!(spec.env, spec.name.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_fields_are_unique() {
        let names: HashSet<_> = FIELDS.iter().map(|spec| spec.name).collect();

        assert_eq!(names.len(), FIELDS.len());
        assert_eq!(FIELDS.len(), 17);
    }
}
