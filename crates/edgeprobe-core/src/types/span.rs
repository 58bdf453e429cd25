use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open token range `[start, end)` marking one relation argument.
///
/// Indices refer to the whitespace-tokenized sentence after entity tags have
/// been stripped. Serialized as a two-element array, e.g. `[1, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct EntitySpan {
    /// Index of the first token (inclusive).
    pub start: usize,
    /// Index one past the last token (exclusive).
    pub end: usize,
}

impl EntitySpan {
    /// Creates a span over tokens `start..end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered by the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<[usize; 2]> for EntitySpan {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<EntitySpan> for [usize; 2] {
    fn from(span: EntitySpan) -> Self {
        [span.start, span.end]
    }
}

impl fmt::Display for EntitySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
