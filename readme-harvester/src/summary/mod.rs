//! Run accounting types.

mod result;
mod run_summary;

pub use result::{ProcessingResult, SkipReason};
pub use run_summary::RunSummary;
