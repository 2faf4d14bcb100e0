use super::language::LanguageCode;
use super::translation_set::TranslationSet;
use super::verdict::RejectReason;

/// Terminal result of one utterance's journey through the pipeline.
/// The only value exposed across the system boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Transcription returned empty or whitespace-only text.
    NoSpeech,
    /// The transcript looked like recognizer noise or a hallucination.
    Rejected(RejectReason),
    /// Detection produced a language outside the supported set; carries
    /// the detected code for diagnostics.
    UnsupportedLanguage(String),
    Translated {
        language: LanguageCode,
        text: String,
        translations: TranslationSet,
    },
}
