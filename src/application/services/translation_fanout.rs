use std::sync::Arc;

use crate::application::ports::Translator;
use crate::domain::{LanguageCode, TranslationSet, TRANSLATION_FAILED_SENTINEL};

/// Produces one translation per configured target language from one
/// validated transcript. Targets are handled independently and
/// concurrently; a failed target degrades to the sentinel slot value
/// without touching the other slots.
pub struct TranslationFanout {
    translator: Arc<dyn Translator>,
    targets: Vec<LanguageCode>,
}

impl TranslationFanout {
    /// Duplicate targets collapse to one slot; first appearance fixes
    /// the position.
    pub fn new(translator: Arc<dyn Translator>, targets: Vec<LanguageCode>) -> Self {
        let mut unique: Vec<LanguageCode> = Vec::with_capacity(targets.len());
        for target in targets {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        Self {
            translator,
            targets: unique,
        }
    }

    pub fn targets(&self) -> &[LanguageCode] {
        &self.targets
    }

    /// Always returns a complete set covering every configured target,
    /// in configured order. When the source language equals a target the
    /// slot holds the input text verbatim, with no capability call.
    pub async fn translate_all(&self, text: &str, source: &LanguageCode) -> TranslationSet {
        let slots = futures::future::join_all(self.targets.iter().map(|target| async move {
            if target == source {
                return (target.clone(), text.to_string());
            }
            match self.translator.translate(text, source, target).await {
                Ok(translated) => (target.clone(), translated),
                Err(error) => {
                    tracing::warn!(
                        lang = %target,
                        error = %error,
                        "translation failed for one target, degrading slot"
                    );
                    (target.clone(), TRANSLATION_FAILED_SENTINEL.to_string())
                }
            }
        }))
        .await;

        let mut set = TranslationSet::new();
        for (target, translated) in slots {
            set.insert(target, translated);
        }
        set
    }
}
