/// Raw output of the transcription capability, consumed by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionResult {
    Empty,
    Text(String),
}

impl TranscriptionResult {
    /// Whitespace-only recognizer output counts as "no speech".
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }
}
