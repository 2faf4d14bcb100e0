use async_trait::async_trait;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::LanguageCode;

/// Deterministic translator for the mock provider wiring: detection
/// returns a fixed code, translations are the input tagged with the
/// target language.
pub struct MockTranslator {
    detected: String,
}

impl MockTranslator {
    pub fn new(detected: impl Into<String>) -> Self {
        Self {
            detected: detected.into(),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn detect_language(&self, _text: &str) -> Result<String, TranslatorError> {
        Ok(self.detected.clone())
    }

    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslatorError> {
        Ok(format!("[{}] {}", target, text))
    }
}
