mod language;
mod outcome;
mod storage_path;
mod transcription;
mod translation_set;
mod utterance;
mod verdict;

pub use language::{LanguageCode, AUTO_SENTINEL, SUPPORTED_LANGUAGES};
pub use outcome::PipelineOutcome;
pub use storage_path::StoragePath;
pub use transcription::TranscriptionResult;
pub use translation_set::{TranslationSet, TRANSLATION_FAILED_SENTINEL};
pub use utterance::{Utterance, UtteranceId};
pub use verdict::{RejectReason, ValidationVerdict};
