pub mod record;
pub mod span;

pub use record::{Record, RecordInfo, Target, TargetInfo};
pub use span::EntitySpan;
