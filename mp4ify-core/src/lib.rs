//! Core library for batch-converting videos to MP4/H.264 with ffmpeg.
//!
//! This crate resolves input files, builds the fixed ffmpeg command line for
//! each one and runs the conversions, isolating per-file failures.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mp4ify_core::{CoreConfig, ProcessSpawner, check_dependency, process_videos, resolve_inputs};
//! use std::path::Path;
//!
//! let config = CoreConfig::default();
//! check_dependency(&config.encoder).unwrap();
//!
//! let inputs = resolve_inputs(Path::new("/path/to/videos"), None).unwrap();
//! let report = process_videos(
//!     &ProcessSpawner,
//!     &config,
//!     &inputs.files,
//!     &inputs.output_dir,
//!     None,
//! ).unwrap();
//!
//! for failed in &report.failed {
//!     eprintln!("{}: {}", failed.input_path.display(), failed.error);
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod external;
pub mod processing;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::{InputKind, ResolvedInputs, find_processable_files, is_supported_video, resolve_inputs};
pub use error::{CoreError, CoreResult};
pub use events::{Event, EventHandler, JsonProgressHandler};
pub use external::{
    EncoderInvocation, EncoderSpawner, ProcessSpawner, check_dependency, encoder_available,
    output_path_for,
};
pub use processing::{BatchReport, FailedConversion, convert, process_videos};
pub use utils::{format_bytes, format_duration};

use std::path::PathBuf;
use std::time::Duration;

/// Result of a successful conversion.
///
/// Returned by [`convert`] and collected into [`BatchReport::converted`].
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub filename: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}
