use std::sync::Arc;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::{LanguageCode, AUTO_SENTINEL};

/// What detection concluded about an accepted transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Supported(LanguageCode),
    /// Detection worked but the language is outside the supported set;
    /// carries the detected code for diagnostics.
    Unsupported(String),
}

/// Determines the source language of an accepted transcript. An explicit
/// hint (other than the auto-sentinel) is trusted without a capability
/// call; otherwise the external detection capability is invoked and its
/// possibly noisy output is folded onto the known language families.
pub struct LanguageDetector {
    translator: Arc<dyn Translator>,
}

impl LanguageDetector {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub async fn detect(
        &self,
        text: &str,
        hint: Option<&str>,
    ) -> Result<Detection, TranslatorError> {
        let explicit = hint
            .map(str::trim)
            .filter(|h| !h.is_empty() && !h.eq_ignore_ascii_case(AUTO_SENTINEL));

        if let Some(code) = explicit {
            return Ok(classify(code));
        }

        let raw = self.translator.detect_language(text).await?;
        tracing::debug!(raw = %raw, "language detection capability returned");
        Ok(classify(&raw))
    }
}

/// Fold a raw, possibly noisy capability answer ("Italian", "zh-TW",
/// "The language is Chinese.") onto a canonical code.
fn classify(raw: &str) -> Detection {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphabetic() || *ch == '-')
        .collect();

    let folded = if cleaned.contains("zh")
        || cleaned.contains("chinese")
        || cleaned.contains("mandarin")
        || cleaned.contains("中文")
    {
        "zh"
    } else if cleaned == "en" || cleaned.starts_with("en-") || cleaned.contains("english") {
        "en"
    } else if cleaned == "it" || cleaned.starts_with("it-") || cleaned.contains("italian") {
        "it"
    } else {
        cleaned.as_str()
    };

    match LanguageCode::normalize(folded) {
        Some(code) if code.is_supported() => Detection::Supported(code),
        Some(code) => Detection::Unsupported(code.as_str().to_string()),
        None => Detection::Unsupported(raw.trim().to_lowercase()),
    }
}
