// ============================================================================
// mp4ify-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field has a default, so an
// empty builder yields the same value as CoreConfig::default().

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    encoder: PathBuf,
    preserve_audio: bool,
    jobs: usize,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        let defaults = CoreConfig::default();
        Self {
            encoder: defaults.encoder,
            preserve_audio: defaults.preserve_audio,
            jobs: defaults.jobs,
        }
    }

    /// Sets the encoder binary.
    ///
    /// # Arguments
    ///
    /// * `encoder` - Bare command name (looked up on PATH) or a path to the binary
    pub fn encoder(mut self, encoder: impl Into<PathBuf>) -> Self {
        self.encoder = encoder.into();
        self
    }

    /// Sets whether the audio track is kept.
    pub fn preserve_audio(mut self, preserve: bool) -> Self {
        self.preserve_audio = preserve;
        self
    }

    /// Sets the number of files converted concurrently.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            encoder: self.encoder,
            preserve_audio: self.preserve_audio,
            jobs: self.jobs,
        }
    }
}
