use std::path::PathBuf;

use thiserror::Error;

/// Which side of an entity span is missing its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// No `<eN>` opening tag was found.
    Start,
    /// No `</eN>` closing tag was found.
    End,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors that can occur while converting an annotation corpus.
#[derive(Debug, Error)]
pub enum EdgeProbeError {
    /// A blank-line delimited group did not contain exactly three lines.
    #[error("line {line}: expected a group of 3 lines, found {size}")]
    MalformedGroup {
        /// 1-based line number of the first line of the group.
        line: usize,
        /// Number of non-blank lines in the group.
        size: usize,
    },

    /// The sentence line does not match `<id> "<sentence>"`.
    #[error("malformed sentence line: {0:?}")]
    MalformedSentence(String),

    /// The sentence does not tag exactly entities 1 and 2.
    #[error("expected entities {{1, 2}}, found {found:?}")]
    EntitySet {
        /// Entity numbers seen in the sentence, in ascending order.
        found: Vec<u32>,
    },

    /// An entity has an opening tag without a closing one, or vice versa.
    #[error("entity e{entity} has no {boundary} tag")]
    UnresolvedSpan {
        /// The entity number.
        entity: u32,
        /// The missing boundary.
        boundary: Boundary,
    },

    /// A record-level failure, annotated with where it happened.
    #[error("record at line {line}: {source}")]
    Record {
        /// 1-based line number of the sentence line.
        line: usize,
        /// The underlying failure.
        #[source]
        source: Box<EdgeProbeError>,
    },

    /// An input path has no file name to derive an output name from.
    #[error("cannot derive an output file name from {0:?}")]
    InvalidPath(PathBuf),

    /// An unknown output format name.
    #[error("unknown output format {0:?} (expected \"json\" or \"jsonl\")")]
    UnknownFormat(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing records failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EdgeProbeError {
    /// Wraps `self` with the line number of the record it came from.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Record {
            line,
            source: Box::new(self),
        }
    }
}

/// Result type alias for edgeprobe operations.
pub type Result<T> = std::result::Result<T, EdgeProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = EdgeProbeError::MalformedGroup { line: 5, size: 2 };
        assert_eq!(err.to_string(), "line 5: expected a group of 3 lines, found 2");

        let err = EdgeProbeError::EntitySet { found: vec![1] };
        assert_eq!(err.to_string(), "expected entities {1, 2}, found [1]");

        let err = EdgeProbeError::UnresolvedSpan {
            entity: 2,
            boundary: Boundary::End,
        };
        assert_eq!(err.to_string(), "entity e2 has no end tag");
    }

    #[test]
    fn at_line_keeps_source() {
        let err = EdgeProbeError::MalformedSentence("oops".into()).at_line(9);
        assert!(err.to_string().starts_with("record at line 9:"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("oops"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EdgeProbeError>();
    }
}
