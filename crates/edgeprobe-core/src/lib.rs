//! # Edgeprobe Core
//!
//! Converts the SemEval-2010 Task 8 relation-classification corpus into
//! edge-probing records: one JSON object per sentence with the tag-stripped
//! text and a single target holding the relation label and the token spans
//! of both arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgeprobe_core::parser::RecordParser;
//!
//! let parser = RecordParser::new().unwrap();
//! let records = parser
//!     .parse_str("1 \"The <e1>cat</e1> sat on the <e2>mat</e2>\"\nComponent-Whole(e2,e1)\nComment: obvious\n")
//!     .unwrap();
//!
//! let target = &records[0].targets[0];
//! assert_eq!(records[0].text, "The cat sat on the mat");
//! assert_eq!(target.label, "Component-Whole(e2,e1)");
//! assert_eq!((target.span1.start, target.span1.end), (1, 2));
//! ```
pub mod convert;
pub mod error;
pub mod parser;
pub mod stats;
pub mod types;
pub mod writer;

// Re-export primary API
pub use convert::{ConvertConfig, Converter, target_path};
pub use error::{Boundary, EdgeProbeError, Result};
pub use parser::{EntitySpans, EntityTagger, RawTriple, RecordParser, parse_lines};
pub use stats::{DatasetStats, Passthrough};
pub use types::{EntitySpan, Record, RecordInfo, Target, TargetInfo};
pub use writer::{OutputFormat, write_records};
