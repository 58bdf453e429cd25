use regex::Regex;
use tracing::debug;

use crate::error::{EdgeProbeError, Result};
use crate::parser::grouping::{RawTriple, parse_lines};
use crate::parser::tags::EntityTagger;
use crate::types::{Record, RecordInfo, Target, TargetInfo};

/// Turns SemEval-2010 Task 8 triples into edge-probing [`Record`]s.
pub struct RecordParser {
    re_sentence: Regex,
    re_comment: Regex,
    tagger: EntityTagger,
}

impl RecordParser {
    /// Constructs a new `RecordParser` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `EdgeProbeError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_sentence: Regex::new(r#"^(\d+)\s+"(.*)"\s*$"#)?,
            re_comment: Regex::new(r"Comment:\s*")?,
            tagger: EntityTagger::new()?,
        })
    }

    /// Builds the record for one triple.
    ///
    /// # Errors
    ///
    /// Any failure is wrapped in `EdgeProbeError::Record` carrying the
    /// triple's line number.
    pub fn parse_triple(&self, triple: &RawTriple) -> Result<Record> {
        self.build(&triple.sentence, &triple.label, &triple.comment)
            .map_err(|e| e.at_line(triple.line))
    }

    /// Parses a whole file's worth of text into records.
    ///
    /// Stops at the first malformed group or record.
    ///
    /// # Errors
    ///
    /// Returns the first grouping or record error encountered.
    ///
    /// # Examples
    /// ```
    /// use edgeprobe_core::parser::RecordParser;
    ///
    /// let parser = RecordParser::new().unwrap();
    /// let input = "1 \"The <e1>cat</e1> sat on the <e2>mat</e2>\"\n\
    ///              Component-Whole(e2,e1)\n\
    ///              Comment: obvious\n";
    /// let records = parser.parse_str(input).unwrap();
    /// assert_eq!(records[0].text, "The cat sat on the mat");
    /// assert_eq!(records[0].targets[0].info.comment, "obvious");
    /// ```
    pub fn parse_str(&self, input: &str) -> Result<Vec<Record>> {
        let triples = parse_lines(input.lines())?;
        debug!(triples = triples.len(), "grouped input lines");
        triples.iter().map(|t| self.parse_triple(t)).collect()
    }

    fn build(&self, sentence_line: &str, label: &str, comment_line: &str) -> Result<Record> {
        let caps = self
            .re_sentence
            .captures(sentence_line)
            .ok_or_else(|| EdgeProbeError::MalformedSentence(sentence_line.to_string()))?;
        let id: u64 = caps[1]
            .parse()
            .map_err(|_| EdgeProbeError::MalformedSentence(sentence_line.to_string()))?;

        let tagged: Vec<&str> = caps
            .get(2)
            .map_or("", |m| m.as_str())
            .split_whitespace()
            .collect();
        let spans = self.tagger.extract_spans(&tagged)?;

        let text = tagged
            .iter()
            .map(|t| self.tagger.strip(t))
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Record {
            text,
            info: RecordInfo { id },
            targets: vec![Target {
                label: label.trim().to_string(),
                span1: spans.e1,
                span2: spans.e2,
                info: TargetInfo {
                    comment: self.re_comment.replace_all(comment_line, "").into_owned(),
                },
            }],
        })
    }
}
