// ============================================================================
// mp4ify-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Binary
//
// This module encapsulates everything that touches the external encoder:
// the availability probe, construction of the fixed ffmpeg argument list,
// and the spawner abstraction that actually runs it.
//
// KEY COMPONENTS:
// - check_dependency / encoder_available: `<encoder> -version` probe
// - EncoderInvocation: the exact command line for one conversion
// - EncoderSpawner: trait seam over process execution (ProcessSpawner in
//   production, MockEncoderSpawner in tests)

use crate::config::VERSION_ARG;
use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// ffmpeg argument building and output naming
pub mod ffmpeg;

/// Traits and implementations for running the encoder
pub mod executor;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use executor::{EncoderSpawner, ProcessSpawner};
pub use ffmpeg::{EncoderInvocation, output_path_for};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that the encoder binary can be started and reports a version.
///
/// Runs `<encoder> -version` with stdout and stderr discarded.
///
/// # Returns
///
/// * `Ok(())` - The encoder started and exited with status zero
/// * `Err(CoreError::EncoderNotFound)` - The binary is missing, could not be
///   started, or exited non-zero
pub fn check_dependency(encoder: &Path) -> CoreResult<()> {
    let name = encoder.display().to_string();
    let result = Command::new(encoder)
        .arg(VERSION_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {}", name);
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency '{}' version probe exited with {}", name, status);
            Err(CoreError::EncoderNotFound(name))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", name);
            Err(CoreError::EncoderNotFound(name))
        }
        Err(e) => {
            log::warn!("Failed to start dependency check command '{}': {}", name, e);
            Err(CoreError::EncoderNotFound(name))
        }
    }
}

/// Returns true if the encoder binary is reachable and answers `-version`.
#[must_use]
pub fn encoder_available(encoder: &Path) -> bool {
    check_dependency(encoder).is_ok()
}
