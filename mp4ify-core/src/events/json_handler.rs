//! JSON progress handler for structured progress output
//!
//! Writes one JSON object per line so other tools can follow a batch.

use super::{Event, EventHandler};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Event handler that outputs events as JSON lines (stdout by default)
pub struct JsonProgressHandler {
    output: Mutex<Box<dyn Write + Send>>,
}

impl Default for JsonProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonProgressHandler {
    /// Create a new JSON progress handler that writes to stdout
    pub fn new() -> Self {
        Self {
            output: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a new JSON progress handler with a custom writer
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            output: Mutex::new(writer),
        }
    }

    fn get_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    fn write_json(&self, value: serde_json::Value) {
        if let Ok(mut output) = self.output.lock() {
            if let Ok(json_str) = serde_json::to_string(&value) {
                let _ = writeln!(output, "{}", json_str);
                let _ = output.flush();
            }
        }
    }
}

impl EventHandler for JsonProgressHandler {
    fn handle(&self, event: &Event) {
        let timestamp = Self::get_timestamp();

        let value = match event {
            Event::BatchStarted {
                total_files,
                output_dir,
                jobs,
            } => json!({
                "type": "batch_started",
                "total_files": total_files,
                "output_dir": output_dir.display().to_string(),
                "jobs": jobs,
                "timestamp": timestamp
            }),

            Event::ConversionStarted {
                input_file,
                output_file,
            } => json!({
                "type": "conversion_started",
                "input_file": input_file.display().to_string(),
                "output_file": output_file.display().to_string(),
                "timestamp": timestamp
            }),

            Event::ConversionComplete {
                input_file,
                output_file,
                input_size,
                output_size,
                elapsed,
            } => json!({
                "type": "conversion_complete",
                "input_file": input_file.display().to_string(),
                "output_file": output_file.display().to_string(),
                "input_size": input_size,
                "output_size": output_size,
                "elapsed_seconds": elapsed.as_secs_f64(),
                "timestamp": timestamp
            }),

            Event::ConversionFailed {
                input_file,
                message,
            } => json!({
                "type": "conversion_failed",
                "input_file": input_file.display().to_string(),
                "message": message,
                "timestamp": timestamp
            }),

            Event::BatchComplete {
                succeeded,
                failed,
                elapsed,
            } => json!({
                "type": "batch_complete",
                "succeeded": succeeded,
                "failed": failed,
                "elapsed_seconds": elapsed.as_secs_f64(),
                "timestamp": timestamp
            }),
        };

        self.write_json(value);
    }
}
