//! Batch lifecycle events.
//!
//! The batch runner reports what it is doing through an optional
//! [`EventHandler`]. The CLI wires [`json_handler::JsonProgressHandler`] to it
//! when machine-readable output is requested.

use std::path::PathBuf;
use std::time::Duration;

pub mod json_handler;

pub use json_handler::JsonProgressHandler;

#[derive(Debug, Clone)]
pub enum Event {
    BatchStarted {
        total_files: usize,
        output_dir: PathBuf,
        jobs: usize,
    },

    ConversionStarted {
        input_file: PathBuf,
        output_file: PathBuf,
    },

    ConversionComplete {
        input_file: PathBuf,
        output_file: PathBuf,
        input_size: u64,
        output_size: u64,
        elapsed: Duration,
    },

    ConversionFailed {
        input_file: PathBuf,
        message: String,
    },

    BatchComplete {
        succeeded: usize,
        failed: usize,
        elapsed: Duration,
    },
}

/// Receives events; shared across worker threads.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}
