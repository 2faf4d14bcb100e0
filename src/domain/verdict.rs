use serde::Serialize;

/// Diagnostic tag attached to a rejected transcript. Observability only;
/// never surfaced to the caller as translation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    TooShort,
    UnsupportedScript,
    HallucinationPattern,
    LowLetterDensity,
    SuspiciousSingleWord,
}

impl RejectReason {
    pub fn as_tag(&self) -> &'static str {
        match self {
            RejectReason::TooShort => "too_short",
            RejectReason::UnsupportedScript => "unsupported_script",
            RejectReason::HallucinationPattern => "hallucination_pattern",
            RejectReason::LowLetterDensity => "low_letter_density",
            RejectReason::SuspiciousSingleWord => "suspicious_single_word",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted(String),
    Rejected(RejectReason),
}
