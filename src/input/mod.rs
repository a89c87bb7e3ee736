//! Swipe log ingestion: CSV/workbook reading and validation/filtering.

mod filter;
mod reader;

pub use filter::{ValidationReport, validate_swipes};
pub use reader::{RawSwipe, read_swipe_log, read_swipe_records, read_swipe_workbook};
