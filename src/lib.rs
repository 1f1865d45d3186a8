//! Filter FASTA/FASTQ records against a list of target identifiers.
//!
//! - Plain and `.gz` inputs (auto-detect by magic bytes).
//! - Streaming, record-by-record (no full-file buffering).
//! - Targets are deduplicated and sorted once, then binary searched per record.
//! - Three independent passes over any mix of inputs: single end, interleaved
//!   and paired end (a pair is kept when either mate matches).
//! - Invert mode emits the non-matching records instead.

pub mod compare;
pub mod error;
pub mod filter;
pub mod line;
pub mod reader;
pub mod record;
pub mod targets;
mod util;

pub use crate::error::FilterError;
pub use crate::filter::{RunConfig, run};
pub use crate::reader::{Format, SeqReader};
pub use crate::record::SeqRecord;
pub use crate::targets::TargetSet;
