use std::sync::Arc;

use crate::application::ports::{Translator, TranslatorError};

use super::mock_translator::MockTranslator;
use super::openai_translator::OpenAiTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationProvider {
    OpenAi,
    Mock,
}

pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(
        provider: TranslationProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn Translator>, TranslatorError> {
        match provider {
            TranslationProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranslatorError::ApiRequestFailed(
                        "API key required for the OpenAI translator".to_string(),
                    )
                })?;
                let translator = OpenAiTranslator::new(key, base_url, Some(model.to_string()));
                Ok(Arc::new(translator))
            }
            TranslationProvider::Mock => Ok(Arc::new(MockTranslator::new("it"))),
        }
    }
}
