use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Serialize, Serializer as _};

use crate::error::{EdgeProbeError, Result};
use crate::types::Record;

/// On-disk layout of the converted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// A single JSON array of records.
    #[default]
    Json,
    /// One compact JSON record per line.
    JsonLines,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::JsonLines => write!(f, "jsonl"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EdgeProbeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "json-lines" | "jsonlines" => Ok(Self::JsonLines),
            _ => Err(EdgeProbeError::UnknownFormat(s.to_string())),
        }
    }
}

/// Serializes `records` to `out` in the given format.
///
/// Records are pulled lazily from the iterator, so a
/// [`DatasetStats::passthrough`](crate::DatasetStats::passthrough) wrapper
/// sees each record exactly when it is written. `pretty` only affects
/// [`OutputFormat::Json`].
///
/// # Errors
///
/// Returns `EdgeProbeError::Json` or `EdgeProbeError::Io` if writing fails.
pub fn write_records<W, I, R>(
    mut out: W,
    records: I,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: std::borrow::Borrow<Record>,
{
    match format {
        OutputFormat::Json => {
            let items = records.into_iter().map(SerRecord);
            if pretty {
                let mut ser = serde_json::Serializer::pretty(&mut out);
                ser.collect_seq(items)?;
            } else {
                let mut ser = serde_json::Serializer::new(&mut out);
                ser.collect_seq(items)?;
            }
            writeln!(out)?;
        }
        OutputFormat::JsonLines => {
            for record in records {
                let record: &Record = record.borrow();
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Lets `collect_seq` serialize owned and borrowed records alike.
struct SerRecord<R>(R);

impl<R: std::borrow::Borrow<Record>> Serialize for SerRecord<R> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let record: &Record = self.0.borrow();
        record.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntitySpan, RecordInfo, Target, TargetInfo};

    fn sample(id: u64) -> Record {
        Record {
            text: "a b".into(),
            info: RecordInfo { id },
            targets: vec![Target {
                label: "Other".into(),
                span1: EntitySpan::new(0, 1),
                span2: EntitySpan::new(1, 2),
                info: TargetInfo {
                    comment: "c".into(),
                },
            }],
        }
    }

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::JsonLines);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert_eq!(OutputFormat::JsonLines.to_string(), "jsonl");
    }

    #[test]
    fn json_array_output() {
        let records = vec![sample(1), sample(2)];
        let mut buf = Vec::new();
        write_records(&mut buf, &records, OutputFormat::Json, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('['));
        assert_eq!(text.lines().count(), 1);
        let back: Vec<Record> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn pretty_json_array_output() {
        let records = vec![sample(1)];
        let mut buf = Vec::new();
        write_records(&mut buf, records.clone(), OutputFormat::Json, true).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().count() > 1);
        let back: Vec<Record> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn empty_json_array() {
        let mut buf = Vec::new();
        write_records(&mut buf, Vec::<Record>::new(), OutputFormat::Json, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn json_lines_output() {
        let records = vec![sample(1), sample(2), sample(3)];
        let mut buf = Vec::new();
        write_records(&mut buf, &records, OutputFormat::JsonLines, true).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let back: Vec<Record> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(back, records);
    }
}
