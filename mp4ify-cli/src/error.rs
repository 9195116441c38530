// ============================================================================
// mp4ify-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and user-facing hints for core errors

use mp4ify_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Hint printed below a fatal error, when one helps.
pub fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::EncoderNotFound(_) => {
            Some("Please install FFmpeg and try again, or point --ffmpeg / MP4IFY_FFMPEG at the binary.")
        }
        CoreError::InvalidInputKind(_) | CoreError::NoMatchingFiles(_) => {
            Some("Only .mp4 and .mov files are converted.")
        }
        _ => None,
    }
}
