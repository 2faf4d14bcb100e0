use std::path::Path;

use regex::Regex;
use serde::Deserialize;

/// Curated list of known recognizer-hallucination patterns. The list is
/// data, not logic: an ordered, versioned set of labelled entries loaded
/// from JSON, matched case-insensitively over cleaned transcript text.
pub struct HallucinationLexicon {
    version: u32,
    entries: Vec<LexiconEntry>,
}

pub struct LexiconEntry {
    label: String,
    matcher: Matcher,
}

enum Matcher {
    /// Whole cleaned text equals the pattern.
    Exact(String),
    /// Cleaned text contains the pattern.
    Substring(String),
    Regex(Regex),
    /// Any single character repeated at least this many times in a row.
    RepeatRun(usize),
}

#[derive(Deserialize)]
struct LexiconFile {
    version: u32,
    entries: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    label: String,
    kind: RawKind,
    pattern: String,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum RawKind {
    Exact,
    Substring,
    Regex,
    RepeatRun,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid pattern file: {0}")]
    InvalidFile(#[from] serde_json::Error),
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
    #[error("invalid repeat threshold '{0}'")]
    InvalidThreshold(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl HallucinationLexicon {
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(file.entries.len());
        for raw in file.entries {
            entries.push(LexiconEntry::compile(raw)?);
        }
        Ok(Self {
            version: file.version,
            entries,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The default pattern set shipped with the binary.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_json(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/hallucination_patterns.json"
        )))
    }

    /// First matching entry wins; entry order is the file order.
    pub fn first_match(&self, cleaned: &str) -> Option<&LexiconEntry> {
        self.entries.iter().find(|entry| entry.matches(cleaned))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexiconEntry {
    fn compile(raw: RawEntry) -> Result<Self, LexiconError> {
        let matcher = match raw.kind {
            RawKind::Exact => Matcher::Exact(raw.pattern),
            RawKind::Substring => Matcher::Substring(raw.pattern),
            RawKind::Regex => {
                let regex = Regex::new(&raw.pattern).map_err(|source| {
                    LexiconError::InvalidRegex {
                        pattern: raw.pattern.clone(),
                        source,
                    }
                })?;
                Matcher::Regex(regex)
            }
            RawKind::RepeatRun => {
                let threshold = raw
                    .pattern
                    .parse::<usize>()
                    .map_err(|_| LexiconError::InvalidThreshold(raw.pattern.clone()))?;
                Matcher::RepeatRun(threshold)
            }
        };
        Ok(Self {
            label: raw.label,
            matcher,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, cleaned: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(pattern) => cleaned == pattern,
            Matcher::Substring(pattern) => cleaned.contains(pattern),
            Matcher::Regex(regex) => regex.is_match(cleaned),
            Matcher::RepeatRun(threshold) => has_repeat_run(cleaned, *threshold),
        }
    }
}

fn has_repeat_run(text: &str, threshold: usize) -> bool {
    if threshold == 0 {
        return false;
    }
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for ch in text.chars() {
        if Some(ch) == previous {
            run += 1;
        } else {
            run = 1;
            previous = Some(ch);
        }
        if run >= threshold {
            return true;
        }
    }
    false
}
