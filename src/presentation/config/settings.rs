use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: ProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub provider: ProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    /// Fixed target set; iteration order is configuration, not input.
    pub target_languages: Vec<String>,
    pub staging_dir: String,
    /// Optional path overriding the embedded hallucination pattern file.
    pub pattern_file: Option<String>,
}

impl Settings {
    /// Assemble settings from environment variables, mirroring the
    /// deployment contract: unset variables fall back to local-dev
    /// defaults (mock providers, ./staging).
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        let target_languages = std::env::var("TARGET_LANGUAGES")
            .unwrap_or_else(|_| "en,it,zh".to_string())
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            transcription: TranscriptionSettings {
                provider: parse_provider("TRANSCRIPTION_PROVIDER")?,
                model: std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "whisper-1".to_string()),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("WHISPER_BASE_URL").ok(),
            },
            translation: TranslationSettings {
                provider: parse_provider("TRANSLATION_PROVIDER")?,
                model: std::env::var("TRANSLATION_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("TRANSLATION_BASE_URL").ok(),
            },
            pipeline: PipelineSettings {
                target_languages,
                staging_dir: std::env::var("STAGING_DIR").unwrap_or_else(|_| "staging".to_string()),
                pattern_file: std::env::var("HALLUCINATION_PATTERNS").ok(),
            },
        })
    }
}

fn parse_provider(name: &'static str) -> Result<ProviderSetting, SettingsError> {
    match std::env::var(name) {
        Ok(raw) => match raw.to_lowercase().as_str() {
            "openai" => Ok(ProviderSetting::OpenAi),
            "mock" => Ok(ProviderSetting::Mock),
            _ => Err(SettingsError::InvalidValue { name, value: raw }),
        },
        Err(_) => Ok(ProviderSetting::Mock),
    }
}
