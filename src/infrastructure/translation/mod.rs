mod mock_translator;
mod openai_translator;
mod translator_factory;

pub use mock_translator::MockTranslator;
pub use openai_translator::OpenAiTranslator;
pub use translator_factory::{TranslationProvider, TranslatorFactory};
