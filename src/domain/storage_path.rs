use std::fmt;

use super::utterance::UtteranceId;

/// Staging key for one utterance's temporary audio. Scoped to the
/// utterance id so concurrent pipeline runs never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(utterance_id: &UtteranceId, filename: &str) -> Self {
        Self(format!("{}/{}", utterance_id.as_uuid(), filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
