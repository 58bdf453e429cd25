//! # Dataset Statistics
//!
//! Counters gathered while records stream to disk, logged after each file.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::Record;

/// Aggregate counts over a set of edge-probing records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetStats {
    /// Number of records seen.
    pub count: usize,
    /// Total tokens over all records.
    pub token_count: usize,
    /// Sum of squared per-record token counts.
    pub token_count_sq: usize,
    /// Longest record, in tokens.
    pub token_max_count: usize,
    /// Total targets over all records.
    pub targets_count: usize,
    /// Most targets on a single record.
    pub targets_max_count: usize,
    /// Total labels over all targets.
    pub label_count: usize,
    /// Summed token length of every `span1`.
    pub span1_length: usize,
    /// Longest `span1`.
    pub span1_length_max: usize,
    /// Summed token length of every `span2`.
    pub span2_length: usize,
    /// Longest `span2`.
    pub span2_length_max: usize,
    /// Number of targets per label.
    pub labels: BTreeMap<String, usize>,
}

impl DatasetStats {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the counters.
    pub fn update(&mut self, record: &Record) {
        let tokens = record.token_count();
        self.count += 1;
        self.token_count += tokens;
        self.token_count_sq += tokens * tokens;
        self.token_max_count = self.token_max_count.max(tokens);

        self.targets_count += record.targets.len();
        self.targets_max_count = self.targets_max_count.max(record.targets.len());

        for target in &record.targets {
            self.label_count += 1;
            *self.labels.entry(target.label.clone()).or_default() += 1;

            let len1 = target.span1.len();
            self.span1_length += len1;
            self.span1_length_max = self.span1_length_max.max(len1);

            let len2 = target.span2.len();
            self.span2_length += len2;
            self.span2_length_max = self.span2_length_max.max(len2);
        }
    }

    /// Wraps `records` so every item is counted as it is yielded.
    ///
    /// # Examples
    /// ```
    /// use edgeprobe_core::DatasetStats;
    /// use edgeprobe_core::parser::RecordParser;
    ///
    /// let parser = RecordParser::new().unwrap();
    /// let records = parser
    ///     .parse_str("1 \"<e1>a</e1> <e2>b</e2>\"\nOther\nComment:\n")
    ///     .unwrap();
    ///
    /// let mut stats = DatasetStats::new();
    /// let seen: Vec<_> = stats.passthrough(records.iter()).collect();
    /// assert_eq!(seen.len(), 1);
    /// assert_eq!(stats.count, 1);
    /// ```
    pub fn passthrough<'s, I, R>(&'s mut self, records: I) -> Passthrough<'s, I::IntoIter>
    where
        I: IntoIterator<Item = R>,
        R: std::borrow::Borrow<Record>,
    {
        Passthrough {
            stats: self,
            inner: records.into_iter(),
        }
    }

    /// Mean tokens per record, or 0 when empty.
    #[must_use]
    pub fn mean_tokens(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.token_count as f64 / self.count as f64
    }

    /// Root-mean-square tokens per record, or 0 when empty.
    #[must_use]
    pub fn rms_tokens(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.token_count_sq as f64 / self.count as f64).sqrt()
    }

    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("count".to_string(), self.count.to_string()),
            ("token.count".to_string(), self.token_count.to_string()),
            ("token.count2".to_string(), self.token_count_sq.to_string()),
            ("token.max_count".to_string(), self.token_max_count.to_string()),
            ("token.mean".to_string(), format!("{:.2}", self.mean_tokens())),
            ("token.rms".to_string(), format!("{:.2}", self.rms_tokens())),
            ("targets.count".to_string(), self.targets_count.to_string()),
            (
                "targets.max_count".to_string(),
                self.targets_max_count.to_string(),
            ),
            ("targets.label.count".to_string(), self.label_count.to_string()),
            ("targets.span1.length".to_string(), self.span1_length.to_string()),
            (
                "targets.span1.length.max".to_string(),
                self.span1_length_max.to_string(),
            ),
            ("targets.span2.length".to_string(), self.span2_length.to_string()),
            (
                "targets.span2.length.max".to_string(),
                self.span2_length_max.to_string(),
            ),
        ];
        rows.extend(
            self.labels
                .iter()
                .map(|(label, n)| (format!("label.{label}"), n.to_string())),
        );
        rows
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        for (i, (key, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key:<key_width$}  {value:>value_width$}")?;
        }
        Ok(())
    }
}

/// Iterator returned by [`DatasetStats::passthrough`].
pub struct Passthrough<'s, I> {
    stats: &'s mut DatasetStats,
    inner: I,
}

impl<I, R> Iterator for Passthrough<'_, I>
where
    I: Iterator<Item = R>,
    R: std::borrow::Borrow<Record>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let record = self.inner.next()?;
        self.stats.update(record.borrow());
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
