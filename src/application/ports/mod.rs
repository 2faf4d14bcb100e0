mod staging_store;
mod transcription_engine;
mod translator;

pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{Translator, TranslatorError};
