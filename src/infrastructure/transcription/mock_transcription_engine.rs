use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Returns a fixed transcript regardless of the audio. Used by the mock
/// provider wiring and local development.
pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _language_hint: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}
