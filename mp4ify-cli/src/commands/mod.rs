//! Command implementations for the CLI.

/// Converts the resolved inputs to MP4/H.264.
pub mod convert;
