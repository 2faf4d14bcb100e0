use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::language::AUTO_SENTINEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(Uuid);

impl UtteranceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UtteranceId {
    fn default() -> Self {
        Self::new()
    }
}

/// One bounded unit of spoken input: a single audio chunk or uploaded
/// file. Created on receipt, destroyed when its pipeline run completes.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub id: UtteranceId,
    pub audio: Bytes,
    pub language_hint: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Utterance {
    pub fn new(audio: Bytes, language_hint: Option<String>) -> Self {
        Self {
            id: UtteranceId::new(),
            audio,
            language_hint,
            received_at: Utc::now(),
        }
    }

    /// The hint forwarded to the transcription capability: present only
    /// when the caller supplied one and it is not the auto-sentinel.
    pub fn forwarded_hint(&self) -> Option<&str> {
        self.language_hint
            .as_deref()
            .map(str::trim)
            .filter(|hint| !hint.is_empty() && !hint.eq_ignore_ascii_case(AUTO_SENTINEL))
    }
}
