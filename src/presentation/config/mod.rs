mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    PipelineSettings, ProviderSetting, ServerSettings, Settings, SettingsError,
    TranscriptionSettings, TranslationSettings,
};
