use std::fmt;

use serde::{Serialize, Serializer};

/// Problem id used when the link text has no `"<id>. "` prefix.
pub const UNKNOWN_ID: &str = "Unknown";

/// Longest row excerpt carried by a [`SuspiciousRow`], in characters.
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Any label the site shows that is not one of the three known ones.
    Other(String),
}

impl Difficulty {
    /// Normalize a scraped label. `"Med."` becomes `Medium`; empty text is no difficulty.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "" => None,
            "Easy" => Some(Self::Easy),
            "Med." | "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            other => Some(Self::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One validated row of the submission history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemRecord {
    /// `YYYY.MM.DD`, either scraped or the processing date.
    pub date: String,
    pub problem_id: String,
    pub problem_title: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_result: Option<String>,
    pub url: String,
}

impl ProblemRecord {
    pub fn key(&self) -> NaturalKey {
        NaturalKey::new(self.problem_id.as_str(), self.problem_title.as_str())
    }
}

/// `(problem_id, problem_title)`, compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NaturalKey {
    pub problem_id: String,
    pub problem_title: String,
}

impl NaturalKey {
    pub fn new(problem_id: impl Into<String>, problem_title: impl Into<String>) -> Self {
        Self {
            problem_id: problem_id.into(),
            problem_title: problem_title.into(),
        }
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.problem_id, self.problem_title)
    }
}

/// A required record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProblemId,
    ProblemTitle,
    Difficulty,
    Url,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProblemId => "problem_id",
            Self::ProblemTitle => "problem_title",
            Self::Difficulty => "difficulty",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteKind {
    /// Link text without the `". "` separator. Informational; the row may still be valid.
    UnexpectedTitleFormat { title: String },
    /// No primary link in the row at all.
    NoTitleLink { missing: Vec<Field> },
    /// Link present, but other required fields could not be recovered.
    MissingFields { missing: Vec<Field> },
}

impl NoteKind {
    pub fn missing(&self) -> &[Field] {
        match self {
            Self::UnexpectedTitleFormat { .. } => &[],
            Self::NoTitleLink { missing } | Self::MissingFields { missing } => missing,
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedTitleFormat { title } => write!(f, "title format unexpected: {}", title),
            Self::NoTitleLink { .. } => {
                write!(f, "no title link found in row (missing: {})", join_fields(self.missing()))
            }
            Self::MissingFields { .. } => write!(f, "missing fields: {}", join_fields(self.missing())),
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Diagnostic for a row that did not cleanly produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousRow {
    /// 1-based position of the row within its document.
    pub row: usize,
    pub kind: NoteKind,
    /// Stripped row text, at most [`EXCERPT_CHARS`] characters.
    pub excerpt: String,
}

impl SuspiciousRow {
    /// True when the row was withheld from the record set.
    pub fn is_blocking(&self) -> bool {
        !matches!(self.kind, NoteKind::UnexpectedTitleFormat { .. })
    }
}

impl fmt::Display for SuspiciousRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}. Raw text: {}", self.row, self.kind, self.excerpt)
    }
}

// ── Tests ──
