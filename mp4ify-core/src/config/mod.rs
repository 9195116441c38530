//! Configuration structures and constants for the mp4ify-core library.
//!
//! The encoding parameters are fixed: every output is H.264 in an MP4
//! container with the moov atom at the front. Only the encoder binary,
//! audio handling and worker count vary between runs.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Encoder binary looked up on PATH when no override is given.
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Argument passed to the encoder to probe availability.
pub const VERSION_ARG: &str = "-version";

/// H.264 encoder name understood by ffmpeg.
pub const VIDEO_CODEC: &str = "libx264";

/// x264 speed preset.
pub const VIDEO_PRESET: &str = "fast";

/// Constant rate factor (0-51, lower is higher quality).
pub const VIDEO_CRF: u8 = 23;

/// Audio codec used when audio is preserved.
pub const AUDIO_CODEC: &str = "aac";

/// Audio bitrate used when audio is preserved.
pub const AUDIO_BITRATE: &str = "192k";

/// Moves container metadata to the front of the file for progressive playback.
pub const MOVFLAGS: &str = "+faststart";

/// Suffix appended to the input stem to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_h264.mp4";

/// Input extensions accepted for conversion (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["mp4", "mov"];

/// Files are converted one at a time unless more workers are requested.
pub const DEFAULT_JOBS: usize = 1;

/// Main configuration structure for a conversion run.
///
/// Created by the consumer (e.g. mp4ify-cli) and passed to
/// [`crate::process_videos`].
///
/// # Examples
///
/// ```rust
/// use mp4ify_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .encoder("/usr/local/bin/ffmpeg")
///     .preserve_audio(false)
///     .jobs(2)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Encoder binary (bare name resolved via PATH, or a path)
    pub encoder: PathBuf,

    /// Keep the audio track (re-encoded to AAC) instead of dropping it
    pub preserve_audio: bool,

    /// Number of files converted concurrently
    pub jobs: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            encoder: PathBuf::from(DEFAULT_ENCODER),
            preserve_audio: true,
            jobs: DEFAULT_JOBS,
        }
    }
}

impl CoreConfig {
    /// Checks the configuration for values the batch runner cannot use.
    pub fn validate(&self) -> CoreResult<()> {
        if self.encoder.as_os_str().is_empty() {
            return Err(CoreError::Config("encoder path must not be empty".to_string()));
        }
        if self.jobs == 0 {
            return Err(CoreError::Config("jobs must be at least 1".to_string()));
        }
        Ok(())
    }
}
