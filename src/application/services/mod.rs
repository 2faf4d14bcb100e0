mod hallucination_lexicon;
mod language_detector;
mod transcript_validator;
mod translation_fanout;
mod utterance_pipeline;

pub use hallucination_lexicon::{HallucinationLexicon, LexiconEntry, LexiconError};
pub use language_detector::{Detection, LanguageDetector};
pub use transcript_validator::TranscriptValidator;
pub use translation_fanout::TranslationFanout;
pub use utterance_pipeline::{PipelineError, UtterancePipeline};
