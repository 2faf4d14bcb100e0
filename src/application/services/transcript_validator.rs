use crate::domain::{RejectReason, ValidationVerdict};

use super::hallucination_lexicon::HallucinationLexicon;

const MIN_CLEANED_CHARS: usize = 2;
const MIN_LETTER_RATIO: f64 = 0.3;

/// Decides whether raw recognizer output is genuine speech. Layered
/// heuristics are applied in a fixed order; the first rejecting layer
/// wins and names the verdict's diagnostic tag. Deterministic and
/// side-effect-free apart from logging.
pub struct TranscriptValidator {
    lexicon: HallucinationLexicon,
}

impl TranscriptValidator {
    pub fn new(lexicon: HallucinationLexicon) -> Self {
        Self { lexicon }
    }

    pub fn validate(&self, raw: &str) -> ValidationVerdict {
        let cleaned = clean(raw);

        if cleaned.chars().count() < MIN_CLEANED_CHARS {
            return ValidationVerdict::Rejected(RejectReason::TooShort);
        }

        if !cleaned.chars().any(is_supported_script) {
            return ValidationVerdict::Rejected(RejectReason::UnsupportedScript);
        }

        if let Some(entry) = self.lexicon.first_match(&cleaned) {
            tracing::debug!(
                pattern = entry.label(),
                "transcript matched hallucination pattern"
            );
            return ValidationVerdict::Rejected(RejectReason::HallucinationPattern);
        }

        if letter_ratio(&cleaned) < MIN_LETTER_RATIO {
            return ValidationVerdict::Rejected(RejectReason::LowLetterDensity);
        }

        if let Some(word) = single_word(&cleaned) {
            let too_short = word.chars().count() < MIN_CLEANED_CHARS;
            let numeric = word.chars().all(|ch| ch.is_ascii_digit());
            if too_short || numeric {
                return ValidationVerdict::Rejected(RejectReason::SuspiciousSingleWord);
            }
        }

        ValidationVerdict::Accepted(raw.trim().to_string())
    }
}

/// Trim, lower-case and strip trailing sentence punctuation before any
/// heuristic looks at the text.
fn clean(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .trim_end_matches(['.', '!', '?', ',', '。', '！', '？', '…'])
        .trim()
        .to_string()
}

/// Latin letters, Italian-accented Latin letters and CJK ideographs.
fn is_supported_script(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(
            ch,
            'à' | 'è' | 'é' | 'ì' | 'í' | 'î' | 'ò' | 'ó' | 'ù' | 'ú'
        )
        || matches!(ch as u32, 0x3400..=0x4DBF | 0x4E00..=0x9FFF)
}

fn letter_ratio(cleaned: &str) -> f64 {
    let total = cleaned.chars().count();
    if total == 0 {
        return 0.0;
    }
    let letters = cleaned.chars().filter(|ch| ch.is_alphabetic()).count();
    letters as f64 / total as f64
}

fn single_word(cleaned: &str) -> Option<&str> {
    let mut words = cleaned.split_whitespace();
    let first = words.next()?;
    if words.next().is_none() {
        Some(first)
    } else {
        None
    }
}
