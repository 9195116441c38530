// mp4ify-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::executor::EncoderSpawner;
use super::ffmpeg::EncoderInvocation;
use crate::error::{CoreResult, unexpected_encoding_error};

use std::io;
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Exit(i32),
    SpawnError(io::ErrorKind),
}

/// An expected invocation, matched when any argument contains `arg_pattern`.
#[derive(Debug, Clone)]
struct MockExpectation {
    arg_pattern: String,
    outcome: MockOutcome,
}

/// Mock implementation of EncoderSpawner.
///
/// Every call is recorded. Calls matching a registered expectation get its
/// scripted outcome (each expectation is consumed once); all other calls
/// succeed with exit code 0.
#[derive(Clone, Default)]
pub struct MockEncoderSpawner {
    expectations: Arc<Mutex<Vec<MockExpectation>>>,
    received_calls: Arc<Mutex<Vec<EncoderInvocation>>>,
    create_dummy_output: bool,
}

impl MockEncoderSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Writes an empty file at the invocation's output path on success.
    pub fn with_dummy_output(mut self) -> Self {
        self.create_dummy_output = true;
        self
    }

    pub fn add_exit_code_expectation(&self, arg_pattern: &str, exit_code: i32) {
        self.push(arg_pattern, MockOutcome::Exit(exit_code));
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, kind: io::ErrorKind) {
        self.push(arg_pattern, MockOutcome::SpawnError(kind));
    }

    pub fn get_received_calls(&self) -> Vec<EncoderInvocation> {
        self.received_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, arg_pattern: &str, outcome: MockOutcome) {
        if let Ok(mut expectations) = self.expectations.lock() {
            expectations.push(MockExpectation {
                arg_pattern: arg_pattern.to_string(),
                outcome,
            });
        }
    }

    fn take_outcome(&self, invocation: &EncoderInvocation) -> MockOutcome {
        let Ok(mut expectations) = self.expectations.lock() else {
            return MockOutcome::Exit(0);
        };
        let args = invocation.args_lossy();
        let found = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        match found {
            Some(index) => {
                let expectation = expectations.remove(index);
                log::info!(
                    "MockEncoderSpawner: Matched expectation with pattern '{}'",
                    expectation.arg_pattern
                );
                expectation.outcome
            }
            None => MockOutcome::Exit(0),
        }
    }
}

impl EncoderSpawner for MockEncoderSpawner {
    fn run(&self, invocation: &EncoderInvocation) -> CoreResult<ExitStatus> {
        if let Ok(mut calls) = self.received_calls.lock() {
            calls.push(invocation.clone());
        }

        match self.take_outcome(invocation) {
            MockOutcome::Exit(code) => {
                if code == 0 && self.create_dummy_output {
                    if let Err(e) = std::fs::File::create(invocation.output()) {
                        log::error!(
                            "MockEncoderSpawner failed to create dummy output file {:?}: {}",
                            invocation.output(),
                            e
                        );
                    }
                }
                Ok(exit_status(code))
            }
            MockOutcome::SpawnError(kind) => Err(unexpected_encoding_error(
                invocation.input(),
                io::Error::new(kind, "simulated spawn failure"),
            )),
        }
    }
}
