use async_trait::async_trait;

use crate::domain::LanguageCode;

/// External translation/detection capability. One interface with
/// swappable backends; both operations may fail per call.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns the raw detected language code. Output may be noisy
    /// (mixed case, extra words); normalization is the caller's job.
    async fn detect_language(&self, text: &str) -> Result<String, TranslatorError>;

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("rate limited")]
    RateLimited,
}
