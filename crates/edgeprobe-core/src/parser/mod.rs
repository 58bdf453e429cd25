pub mod grouping;
pub mod record;
pub mod tags;

pub use grouping::{RawTriple, parse_lines};
pub use record::RecordParser;
pub use tags::{EntitySpans, EntityTagger};
