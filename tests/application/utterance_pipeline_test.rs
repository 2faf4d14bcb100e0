use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::sync::Mutex;

use bytes::Bytes;

use voxlate::application::ports::{
    TranscriptionEngine, TranscriptionError, Translator, TranslatorError,
};
use voxlate::application::services::{
    HallucinationLexicon, PipelineError, TranscriptValidator, UtterancePipeline,
};
use voxlate::domain::{LanguageCode, PipelineOutcome, RejectReason, Utterance};
use voxlate::infrastructure::storage::MemoryStagingStore;

struct ScriptedEngine {
    transcript: Result<String, ()>,
    seen_hints: Mutex<Vec<Option<String>>>,
}

impl ScriptedEngine {
    fn returning(transcript: &str) -> Arc<Self> {
        Arc::new(Self {
            transcript: Ok(transcript.to_string()),
            seen_hints: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            transcript: Err(()),
            seen_hints: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for ScriptedEngine {
    async fn transcribe(
        &self,
        _audio: &[u8],
        language_hint: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        self.seen_hints
            .lock()
            .unwrap()
            .push(language_hint.map(String::from));
        self.transcript
            .clone()
            .map_err(|_| TranscriptionError::ApiRequestFailed("scripted failure".to_string()))
    }
}

struct ScriptedTranslator {
    detected: Result<String, ()>,
    detect_calls: AtomicUsize,
    translate_calls: AtomicUsize,
}

impl ScriptedTranslator {
    fn detecting(code: &str) -> Arc<Self> {
        Arc::new(Self {
            detected: Ok(code.to_string()),
            detect_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
        })
    }

    fn failing_detection() -> Arc<Self> {
        Arc::new(Self {
            detected: Err(()),
            detect_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl Translator for ScriptedTranslator {
    async fn detect_language(&self, _text: &str) -> Result<String, TranslatorError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detected
            .clone()
            .map_err(|_| TranslatorError::ApiRequestFailed("scripted failure".to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslatorError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}:{}", target, text))
    }
}

fn lang(code: &str) -> LanguageCode {
    LanguageCode::supported(code).unwrap()
}

fn pipeline(
    engine: Arc<ScriptedEngine>,
    translator: Arc<ScriptedTranslator>,
    staging: Arc<MemoryStagingStore>,
) -> UtterancePipeline {
    let validator = Arc::new(TranscriptValidator::new(
        HallucinationLexicon::embedded().unwrap(),
    ));
    UtterancePipeline::new(
        engine,
        validator,
        translator,
        vec![lang("en"), lang("zh")],
        staging,
    )
}

#[tokio::test]
async fn given_italian_speech_when_processing_then_translated_outcome_with_full_map() {
    let engine = ScriptedEngine::returning("Ciao, come stai?");
    let translator = ScriptedTranslator::detecting("it");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator.clone(), staging.clone());

    let outcome = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await
        .unwrap();

    match outcome {
        PipelineOutcome::Translated {
            language,
            text,
            translations,
        } => {
            assert_eq!(language, lang("it"));
            assert_eq!(text, "Ciao, come stai?");
            assert_eq!(translations.len(), 2);
            assert_eq!(translations.get(&lang("en")), Some("en:Ciao, come stai?"));
            assert_eq!(translations.get(&lang("zh")), Some("zh:Ciao, come stai?"));
        }
        other => panic!("expected Translated, got {other:?}"),
    }
    assert_eq!(translator.detect_calls.load(Ordering::SeqCst), 1);
    assert_eq!(translator.translate_calls.load(Ordering::SeqCst), 2);
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_empty_transcription_when_processing_then_no_speech_and_no_downstream_calls() {
    let engine = ScriptedEngine::returning("   ");
    let translator = ScriptedTranslator::detecting("it");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator.clone(), staging.clone());

    let outcome = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::NoSpeech);
    assert_eq!(translator.detect_calls.load(Ordering::SeqCst), 0);
    assert_eq!(translator.translate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_hallucinated_transcript_when_processing_then_rejected_and_no_downstream_calls() {
    let engine = ScriptedEngine::returning("Subscribe to my channel");
    let translator = ScriptedTranslator::detecting("en");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator.clone(), staging.clone());

    let outcome = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PipelineOutcome::Rejected(RejectReason::HallucinationPattern)
    );
    assert_eq!(translator.detect_calls.load(Ordering::SeqCst), 0);
    assert_eq!(translator.translate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_unsupported_language_when_processing_then_unsupported_outcome_and_no_translations() {
    // Japanese with kanji so the script check passes and detection runs.
    let engine = ScriptedEngine::returning("今日は良い天気ですね");
    let translator = ScriptedTranslator::detecting("ja");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator.clone(), staging.clone());

    let outcome = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PipelineOutcome::UnsupportedLanguage("ja".to_string())
    );
    assert_eq!(translator.translate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_transcription_failure_when_processing_then_error_and_staging_released() {
    let engine = ScriptedEngine::failing();
    let translator = ScriptedTranslator::detecting("it");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator, staging.clone());

    let result = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await;

    assert!(matches!(result, Err(PipelineError::Transcription(_))));
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_detection_failure_when_processing_then_error_and_staging_released() {
    let engine = ScriptedEngine::returning("Ciao, come stai?");
    let translator = ScriptedTranslator::failing_detection();
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine, translator, staging.clone());

    let result = pipeline
        .process(Utterance::new(Bytes::from_static(b"audio"), None))
        .await;

    assert!(matches!(result, Err(PipelineError::Detection(_))));
    assert_eq!(staging.staged_count(), 0);
}

#[tokio::test]
async fn given_auto_hint_when_processing_then_no_hint_reaches_the_engine() {
    let engine = ScriptedEngine::returning("Ciao, come stai?");
    let translator = ScriptedTranslator::detecting("it");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine.clone(), translator, staging);

    pipeline
        .process(Utterance::new(
            Bytes::from_static(b"audio"),
            Some("auto".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(engine.seen_hints.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test]
async fn given_explicit_hint_when_processing_then_hint_reaches_engine_and_skips_detection() {
    let engine = ScriptedEngine::returning("Ciao, come stai?");
    let translator = ScriptedTranslator::detecting("en");
    let staging = Arc::new(MemoryStagingStore::new());
    let pipeline = pipeline(engine.clone(), translator.clone(), staging);

    let outcome = pipeline
        .process(Utterance::new(
            Bytes::from_static(b"audio"),
            Some("it".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(
        engine.seen_hints.lock().unwrap().as_slice(),
        &[Some("it".to_string())]
    );
    assert_eq!(translator.detect_calls.load(Ordering::SeqCst), 0);
    assert!(matches!(
        outcome,
        PipelineOutcome::Translated { language, .. } if language == lang("it")
    ));
}
