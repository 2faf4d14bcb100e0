use async_trait::async_trait;

/// External speech-to-text capability. The hint, when present, names the
/// expected source language; callers suppress the auto-sentinel before
/// reaching this seam.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        language_hint: Option<&str>,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
}
