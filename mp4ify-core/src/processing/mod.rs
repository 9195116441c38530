//! Conversion orchestration.
//!
//! [`convert`] runs one file through the encoder; [`process_videos`] runs a
//! whole batch, isolating per-file failures.

pub mod batch;
pub mod convert;

pub use batch::{BatchReport, FailedConversion, effective_jobs, process_videos};
pub use convert::convert;
