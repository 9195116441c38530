// ============================================================================
// mp4ify-core/src/external/executor.rs
// ============================================================================
//
// ENCODER EXECUTOR: Running the Encoder as a Child Process
//
// The EncoderSpawner trait is the seam between batch orchestration and the
// operating system. ProcessSpawner runs the real binary and blocks until it
// exits; tests substitute MockEncoderSpawner.

use super::ffmpeg::EncoderInvocation;
use crate::error::{CoreResult, unexpected_encoding_error};

use std::process::ExitStatus;

/// Something that can run an encoder invocation to completion.
///
/// Implementations must be `Sync` so a batch can share one spawner across
/// worker threads.
pub trait EncoderSpawner: Sync {
    /// Runs the invocation and waits for it to exit.
    ///
    /// A non-zero exit is returned as `Ok(status)`; only failures to start or
    /// wait on the child are errors.
    fn run(&self, invocation: &EncoderInvocation) -> CoreResult<ExitStatus>;
}

/// Production spawner using `std::process::Command`.
///
/// The child inherits stdin, stdout and stderr, so the encoder's own progress
/// output reaches the terminal. There is no timeout.
#[derive(Debug, Clone, Default)]
pub struct ProcessSpawner;

impl EncoderSpawner for ProcessSpawner {
    fn run(&self, invocation: &EncoderInvocation) -> CoreResult<ExitStatus> {
        log::debug!("Running encoder command: {}", invocation);
        invocation
            .to_command()
            .status()
            .map_err(|e| unexpected_encoding_error(invocation.input(), e))
    }
}
