use serde::{Deserialize, Serialize};

use super::span::EntitySpan;

/// One sentence in edge-probing format.
///
/// Field order matches the on-disk schema: `text`, `info`, `targets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Tag-stripped tokens joined by single spaces.
    pub text: String,

    /// Record metadata.
    pub info: RecordInfo,

    /// Labelled span pairs over `text`.
    pub targets: Vec<Target>,
}

/// Metadata attached to a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInfo {
    /// Sentence id from the source corpus.
    pub id: u64,
}

/// A relation label over a pair of entity spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Relation label, e.g. `Component-Whole(e2,e1)`.
    pub label: String,

    /// Span of entity `e1`.
    pub span1: EntitySpan,

    /// Span of entity `e2`.
    pub span2: EntitySpan,

    /// Target metadata.
    pub info: TargetInfo,
}

/// Metadata attached to a [`Target`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Annotator comment, without the `Comment:` marker.
    pub comment: String,
}

impl Record {
    /// Iterates over the whitespace-separated tokens of `text`.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Number of tokens in `text`.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record(id={}, tokens={}", self.info.id, self.token_count())?;
        for target in &self.targets {
            write!(f, ", {} {} {}", target.label, target.span1, target.span2)?;
        }
        write!(f, ")")
    }
}
