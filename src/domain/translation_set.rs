use super::language::LanguageCode;

/// Slot value used when a single target's translation call failed.
pub const TRANSLATION_FAILED_SENTINEL: &str = "[translation unavailable]";

/// One translated string per configured target language, in the
/// configured iteration order. A slot is either the translation, the
/// source text verbatim (when source equals target) or the failure
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationSet {
    slots: Vec<(LanguageCode, String)>,
}

impl TranslationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: LanguageCode, text: String) {
        self.slots.push((target, text));
    }

    pub fn get(&self, target: &LanguageCode) -> Option<&str> {
        self.slots
            .iter()
            .find(|(code, _)| code == target)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &str)> {
        self.slots.iter().map(|(code, text)| (code, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
