use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;
use futures::stream::BoxStream;

use crate::application::ports::{
    StagingStore, StagingStoreError, TranscriptionEngine, TranscriptionError, Translator,
    TranslatorError,
};
use crate::domain::{
    LanguageCode, PipelineOutcome, StoragePath, TranscriptionResult, Utterance,
    ValidationVerdict,
};

use super::language_detector::{Detection, LanguageDetector};
use super::transcript_validator::TranscriptValidator;
use super::translation_fanout::TranslationFanout;

const STAGED_FILENAME: &str = "chunk.audio";

/// External capability fault that aborts the current utterance. Distinct
/// from the benign outcomes in [`PipelineOutcome`]; never crashes the
/// process or other in-flight utterances.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("language detection failed: {0}")]
    Detection(#[from] TranslatorError),
    #[error("staging failed: {0}")]
    Staging(#[from] StagingStoreError),
}

/// Orchestrates one utterance end to end:
/// transcribe -> validate -> detect language -> fan out translations.
/// Stages are strictly sequential; runs for different utterances share
/// no mutable state.
pub struct UtterancePipeline {
    engine: Arc<dyn TranscriptionEngine>,
    validator: Arc<TranscriptValidator>,
    detector: LanguageDetector,
    fanout: TranslationFanout,
    staging: Arc<dyn StagingStore>,
}

impl UtterancePipeline {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        validator: Arc<TranscriptValidator>,
        translator: Arc<dyn Translator>,
        targets: Vec<LanguageCode>,
        staging: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            engine,
            validator,
            detector: LanguageDetector::new(Arc::clone(&translator)),
            fanout: TranslationFanout::new(translator, targets),
            staging,
        }
    }

    pub fn targets(&self) -> &[LanguageCode] {
        self.fanout.targets()
    }

    /// Staged audio is released on every exit path, success or not,
    /// before the run is considered complete.
    #[tracing::instrument(skip(self, utterance), fields(utterance_id = %utterance.id.as_uuid()))]
    pub async fn process(&self, utterance: Utterance) -> Result<PipelineOutcome, PipelineError> {
        let path = StoragePath::new(&utterance.id, STAGED_FILENAME);

        let byte_stream: BoxStream<'_, Result<Bytes, io::Error>> =
            Box::pin(stream::iter([Ok(utterance.audio.clone())]));
        self.staging
            .store(&path, byte_stream, Some(utterance.audio.len() as u64))
            .await?;

        let result = self.run_stages(&utterance, &path).await;

        if let Err(error) = self.staging.delete(&path).await {
            tracing::warn!(path = %path, error = %error, "failed to release staged audio");
        }

        result
    }

    async fn run_stages(
        &self,
        utterance: &Utterance,
        path: &StoragePath,
    ) -> Result<PipelineOutcome, PipelineError> {
        let audio = self.staging.fetch(path).await?;

        let raw = self
            .engine
            .transcribe(&audio, utterance.forwarded_hint())
            .await?;

        let text = match TranscriptionResult::from_raw(&raw) {
            TranscriptionResult::Empty => {
                tracing::debug!("no speech detected");
                return Ok(PipelineOutcome::NoSpeech);
            }
            TranscriptionResult::Text(text) => text,
        };

        let accepted = match self.validator.validate(&text) {
            ValidationVerdict::Accepted(accepted) => accepted,
            ValidationVerdict::Rejected(reason) => {
                tracing::info!(reason = reason.as_tag(), "transcript rejected");
                return Ok(PipelineOutcome::Rejected(reason));
            }
        };

        let language = match self
            .detector
            .detect(&accepted, utterance.language_hint.as_deref())
            .await?
        {
            Detection::Supported(language) => language,
            Detection::Unsupported(detected) => {
                tracing::info!(detected = %detected, "detected language not supported");
                return Ok(PipelineOutcome::UnsupportedLanguage(detected));
            }
        };

        let translations = self.fanout.translate_all(&accepted, &language).await;

        tracing::info!(
            language = %language,
            slots = translations.len(),
            "utterance translated"
        );

        Ok(PipelineOutcome::Translated {
            language,
            text: accepted,
            translations,
        })
    }
}
