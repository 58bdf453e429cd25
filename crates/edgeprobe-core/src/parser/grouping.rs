//! # Triple Grouping
//!
//! SemEval-2010 Task 8 files store one example per blank-line separated
//! block of exactly three lines:
//!
//! ```text
//! 12 "Text of the sentence with <e1>entity</e1> <e2>tags</e2>"
//! Label(e1,e2)
//! Comment: text from the annotator explaining the label
//! ```

use crate::error::{EdgeProbeError, Result};

/// One annotated example as it appears in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTriple {
    /// `<id> "<tagged sentence>"`
    pub sentence: String,
    /// Relation label line.
    pub label: String,
    /// `Comment: ...` line.
    pub comment: String,
    /// 1-based line number of `sentence` in the source.
    pub line: usize,
}

/// Groups lines into [`RawTriple`]s.
///
/// Lines are trimmed; blank lines separate groups and may repeat. Every
/// group, including one left open at end of input, must hold exactly three
/// lines.
///
/// # Errors
///
/// Returns `EdgeProbeError::MalformedGroup` for the first group of any other size.
///
/// # Examples
/// ```
/// use edgeprobe_core::parser::parse_lines;
///
/// let input = "1 \"<e1>A</e1> <e2>b</e2>\"\nOther\nComment:\n\n";
/// let triples = parse_lines(input.lines()).unwrap();
/// assert_eq!(triples.len(), 1);
/// assert_eq!(triples[0].label, "Other");
/// ```
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<RawTriple>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut triples = Vec::new();
    let mut current: Vec<String> = Vec::with_capacity(3);
    let mut group_start = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            if !current.is_empty() {
                triples.push(close_group(&mut current, group_start)?);
            }
            continue;
        }
        if current.is_empty() {
            group_start = idx + 1;
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        triples.push(close_group(&mut current, group_start)?);
    }

    Ok(triples)
}

fn close_group(current: &mut Vec<String>, line: usize) -> Result<RawTriple> {
    let [sentence, label, comment]: [String; 3] = std::mem::take(current)
        .try_into()
        .map_err(|group: Vec<String>| EdgeProbeError::MalformedGroup {
            line,
            size: group.len(),
        })?;
    Ok(RawTriple {
        sentence,
        label,
        comment,
        line,
    })
}
