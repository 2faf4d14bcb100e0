use std::fmt;

use serde::Serialize;

/// Hint value meaning "no explicit language; let the capability detect".
pub const AUTO_SENTINEL: &str = "auto";

/// Languages the pipeline can translate between.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "it", "zh"];

/// All regional Chinese tags (zh-CN, zh-TW, zh-Hans, ...) collapse to this.
const CHINESE_FAMILY_PREFIX: &str = "zh";

/// A canonical language tag. Construction goes through [`normalize`],
/// so two codes naming the same language always compare equal.
///
/// [`normalize`]: LanguageCode::normalize
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Canonicalize a raw language tag. Case-folds, collapses every
    /// Chinese regional variant to the family code, passes everything
    /// else through lower-cased. Empty or blank input yields `None`.
    ///
    /// Idempotent: normalizing an already-canonical code is a no-op.
    pub fn normalize(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() {
            return None;
        }
        if folded.starts_with(CHINESE_FAMILY_PREFIX) {
            return Some(Self(CHINESE_FAMILY_PREFIX.to_string()));
        }
        Some(Self(folded))
    }

    /// Normalize, then keep the code only if it is in the supported set.
    pub fn supported(raw: &str) -> Option<Self> {
        Self::normalize(raw).filter(|code| code.is_supported())
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
