use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use voxlate::application::ports::{Translator, TranslatorError};
use voxlate::application::services::{Detection, LanguageDetector};
use voxlate::domain::LanguageCode;

struct StubTranslator {
    detected: String,
    detect_calls: AtomicUsize,
}

impl StubTranslator {
    fn returning(detected: &str) -> Arc<Self> {
        Arc::new(Self {
            detected: detected.to_string(),
            detect_calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl Translator for StubTranslator {
    async fn detect_language(&self, _text: &str) -> Result<String, TranslatorError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.detected.clone())
    }

    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        _target: &LanguageCode,
    ) -> Result<String, TranslatorError> {
        Ok(text.to_string())
    }
}

struct FailingTranslator;

#[async_trait::async_trait]
impl Translator for FailingTranslator {
    async fn detect_language(&self, _text: &str) -> Result<String, TranslatorError> {
        Err(TranslatorError::ApiRequestFailed("boom".to_string()))
    }

    async fn translate(
        &self,
        _text: &str,
        _source: &LanguageCode,
        _target: &LanguageCode,
    ) -> Result<String, TranslatorError> {
        Err(TranslatorError::ApiRequestFailed("boom".to_string()))
    }
}

fn supported(code: &str) -> Detection {
    Detection::Supported(LanguageCode::supported(code).unwrap())
}

#[tokio::test]
async fn given_explicit_hint_when_detecting_then_hint_is_trusted_without_capability_call() {
    let stub = StubTranslator::returning("en");
    let detector = LanguageDetector::new(stub.clone());

    let detection = detector.detect("Ciao", Some("it")).await.unwrap();

    assert_eq!(detection, supported("it"));
    assert_eq!(stub.detect_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_auto_sentinel_hint_when_detecting_then_capability_is_invoked() {
    let stub = StubTranslator::returning("it");
    let detector = LanguageDetector::new(stub.clone());

    let detection = detector.detect("Ciao, come stai?", Some("auto")).await.unwrap();

    assert_eq!(detection, supported("it"));
    assert_eq!(stub.detect_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_noisy_capability_output_when_detecting_then_folds_onto_language_family() {
    for (raw, expected) in [
        ("Italian", "it"),
        ("  EN ", "en"),
        ("en-US", "en"),
        ("zh-TW", "zh"),
        ("The language is Chinese.", "zh"),
        ("Mandarin Chinese", "zh"),
        ("english!", "en"),
    ] {
        let stub = StubTranslator::returning(raw);
        let detector = LanguageDetector::new(stub);
        let detection = detector.detect("text", None).await.unwrap();
        assert_eq!(detection, supported(expected), "raw answer {raw:?}");
    }
}

#[tokio::test]
async fn given_unsupported_language_when_detecting_then_reports_detected_code() {
    let stub = StubTranslator::returning("ja");
    let detector = LanguageDetector::new(stub);

    let detection = detector.detect("こんにちは", None).await.unwrap();

    assert_eq!(detection, Detection::Unsupported("ja".to_string()));
}

#[tokio::test]
async fn given_unsupported_hint_when_detecting_then_reports_unsupported_without_call() {
    let stub = StubTranslator::returning("en");
    let detector = LanguageDetector::new(stub.clone());

    let detection = detector.detect("text", Some("ko")).await.unwrap();

    assert_eq!(detection, Detection::Unsupported("ko".to_string()));
    assert_eq!(stub.detect_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_capability_failure_when_detecting_then_error_propagates() {
    let detector = LanguageDetector::new(Arc::new(FailingTranslator));

    let result = detector.detect("text", None).await;

    assert!(matches!(result, Err(TranslatorError::ApiRequestFailed(_))));
}
