//! # Entity Tag Extraction
//!
//! Sentences mark relation arguments inline with `<e1>...</e1>` and
//! `<e2>...</e2>`. Tags are glued to the tokens they wrap, so after
//! whitespace tokenization a token like `<e1>cat</e1>` both opens and
//! closes entity 1.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{Boundary, EdgeProbeError, Result};
use crate::types::EntitySpan;

/// The two argument spans of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpans {
    /// Span of `e1`.
    pub e1: EntitySpan,
    /// Span of `e2`.
    pub e2: EntitySpan,
}

/// Finds and strips `<eN>` / `</eN>` tags in tokenized sentences.
#[derive(Debug, Clone)]
pub struct EntityTagger {
    re_open: Regex,
    re_close: Regex,
    re_any: Regex,
}

impl EntityTagger {
    /// Constructs a new `EntityTagger` with pre-compiled tag patterns.
    ///
    /// # Errors
    ///
    /// Returns `EdgeProbeError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_open: Regex::new(r"<e(\d+)>")?,
            re_close: Regex::new(r"</e(\d+)>")?,
            re_any: Regex::new(r"</?e\d+>")?,
        })
    }

    /// Removes every entity tag from `token`.
    #[must_use]
    pub fn strip<'a>(&self, token: &'a str) -> std::borrow::Cow<'a, str> {
        self.re_any.replace_all(token, "")
    }

    /// Computes the spans of entities 1 and 2 from still-tagged tokens.
    ///
    /// A token at index `i` carrying `<eN>` starts entity N at `i`; one
    /// carrying `</eN>` ends it at `i + 1`. Opening and closing are matched
    /// independently. Only the last opening and the last closing tag of a
    /// token count, and a later token overrides an earlier one. Spans are not
    /// checked for order, so a closing tag ahead of its opening tag yields an
    /// inverted span.
    ///
    /// # Errors
    ///
    /// - `EntitySet` if the tagged entities are not exactly `{1, 2}`
    /// - `UnresolvedSpan` if an entity lacks its opening or closing tag
    ///
    /// # Examples
    /// ```
    /// use edgeprobe_core::parser::EntityTagger;
    ///
    /// let tagger = EntityTagger::new().unwrap();
    /// let tokens = ["The", "<e1>cat</e1>", "sat", "on", "the", "<e2>mat</e2>"];
    /// let spans = tagger.extract_spans(&tokens).unwrap();
    /// assert_eq!((spans.e1.start, spans.e1.end), (1, 2));
    /// assert_eq!((spans.e2.start, spans.e2.end), (5, 6));
    /// ```
    pub fn extract_spans<S: AsRef<str>>(&self, tokens: &[S]) -> Result<EntitySpans> {
        let mut bounds: BTreeMap<u32, (Option<usize>, Option<usize>)> = BTreeMap::new();

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            if let Some(entity) = last_entity(&self.re_open, token) {
                bounds.entry(entity).or_default().0 = Some(i);
            }
            if let Some(entity) = last_entity(&self.re_close, token) {
                bounds.entry(entity).or_default().1 = Some(i + 1);
            }
        }

        if bounds.len() != 2 || !bounds.contains_key(&1) || !bounds.contains_key(&2) {
            return Err(EdgeProbeError::EntitySet {
                found: bounds.into_keys().collect(),
            });
        }

        Ok(EntitySpans {
            e1: resolve(1, bounds[&1])?,
            e2: resolve(2, bounds[&2])?,
        })
    }
}

/// Entity number of the last tag `re` matches in `token`.
///
/// Digit runs too long for `u32` map to `u32::MAX` so they still fail the
/// `{1, 2}` check.
fn last_entity(re: &Regex, token: &str) -> Option<u32> {
    re.captures_iter(token)
        .last()
        .map(|c| c[1].parse().unwrap_or(u32::MAX))
}

fn resolve(entity: u32, (start, end): (Option<usize>, Option<usize>)) -> Result<EntitySpan> {
    let start = start.ok_or(EdgeProbeError::UnresolvedSpan {
        entity,
        boundary: Boundary::Start,
    })?;
    let end = end.ok_or(EdgeProbeError::UnresolvedSpan {
        entity,
        boundary: Boundary::End,
    })?;
    Ok(EntitySpan::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn single_token_entities() {
        let tagger = EntityTagger::new().unwrap();
        let spans = tagger
            .extract_spans(&tokens("The <e1>cat</e1> sat on the <e2>mat</e2>"))
            .unwrap();
        assert_eq!(spans.e1, EntitySpan::new(1, 2));
        assert_eq!(spans.e2, EntitySpan::new(5, 6));
    }

    #[test]
    fn multi_token_entities() {
        let tagger = EntityTagger::new().unwrap();
        let spans = tagger
            .extract_spans(&tokens(
                "<e1>The big red</e1> box held <e2>several old books</e2> .",
            ))
            .unwrap();
        assert_eq!(spans.e1, EntitySpan::new(0, 3));
        assert_eq!(spans.e2, EntitySpan::new(5, 8));
    }

    #[test]
    fn entity_order_in_sentence_does_not_matter() {
        let tagger = EntityTagger::new().unwrap();
        let spans = tagger
            .extract_spans(&tokens("<e2>Smoke</e2> came from the <e1>fire</e1>."))
            .unwrap();
        assert_eq!(spans.e1, EntitySpan::new(4, 5));
        assert_eq!(spans.e2, EntitySpan::new(0, 1));
    }

    #[test]
    fn missing_entity_two() {
        let tagger = EntityTagger::new().unwrap();
        let err = tagger
            .extract_spans(&tokens("The <e1>cat</e1> sat on the mat"))
            .unwrap_err();
        match err {
            EdgeProbeError::EntitySet { found } => assert_eq!(found, vec![1]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_entity_is_rejected() {
        let tagger = EntityTagger::new().unwrap();
        let err = tagger
            .extract_spans(&tokens("<e1>a</e1> <e2>b</e2> <e3>c</e3>"))
            .unwrap_err();
        assert!(matches!(err, EdgeProbeError::EntitySet { found } if found == vec![1, 2, 3]));
    }

    #[test]
    fn unclosed_entity() {
        let tagger = EntityTagger::new().unwrap();
        let err = tagger
            .extract_spans(&tokens("<e1>a b <e2>c</e2>"))
            .unwrap_err();
        assert!(matches!(
            err,
            EdgeProbeError::UnresolvedSpan {
                entity: 1,
                boundary: Boundary::End
            }
        ));
    }

    #[test]
    fn unopened_entity() {
        let tagger = EntityTagger::new().unwrap();
        let err = tagger
            .extract_spans(&tokens("<e1>a</e1> c</e2>"))
            .unwrap_err();
        assert!(matches!(
            err,
            EdgeProbeError::UnresolvedSpan {
                entity: 2,
                boundary: Boundary::Start
            }
        ));
    }

    #[test]
    fn inverted_entity_is_kept() {
        let tagger = EntityTagger::new().unwrap();
        let spans = tagger
            .extract_spans(&tokens("a</e1> <e1>b <e2>c</e2>"))
            .unwrap();
        assert_eq!(spans.e1, EntitySpan::new(1, 1));
        assert!(spans.e1.is_empty());
        assert_eq!(spans.e2, EntitySpan::new(2, 3));
    }

    #[test]
    fn token_tagging_both_entities_keeps_last_tag() {
        let tagger = EntityTagger::new().unwrap();
        let err = tagger
            .extract_spans(&tokens("the <e1>sea</e1>-<e2>water</e2> rose"))
            .unwrap_err();
        match err {
            EdgeProbeError::EntitySet { found } => assert_eq!(found, vec![2]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_tag_in_token_keeps_last() {
        let tagger = EntityTagger::new().unwrap();
        let spans = tagger
            .extract_spans(&tokens("<e1>a</e1><e1>b</e1> <e2>c</e2>"))
            .unwrap();
        assert_eq!(spans.e1, EntitySpan::new(0, 1));
        assert_eq!(spans.e2, EntitySpan::new(1, 2));
    }

    #[test]
    fn strip_removes_all_tags() {
        let tagger = EntityTagger::new().unwrap();
        assert_eq!(tagger.strip("<e1>cat</e1>"), "cat");
        assert_eq!(tagger.strip("<e2>mat</e2>."), "mat.");
        assert_eq!(tagger.strip("plain"), "plain");
        assert_eq!(tagger.strip("<b>kept</b>"), "<b>kept</b>");
    }
}
