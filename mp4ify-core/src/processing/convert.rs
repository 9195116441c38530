// ============================================================================
// mp4ify-core/src/processing/convert.rs
// ============================================================================
//
// SINGLE-FILE CONVERSION
//
// Derives the output path, builds the fixed ffmpeg command line, runs it and
// turns the exit status into a ConvertResult or a per-file CoreError. No
// retries; the encoder's exit status is the only integrity check.

use crate::ConvertResult;
use crate::error::{CoreResult, encoding_failed_error};
use crate::external::{EncoderInvocation, EncoderSpawner, output_path_for};
use crate::terminal;
use crate::utils::{get_file_size, get_filename_safe};

use std::path::Path;
use std::time::Instant;

/// Converts one input file into `<stem>_h264.mp4` inside `output_dir`.
///
/// Blocks until the encoder exits.
///
/// # Returns
///
/// * `Ok(ConvertResult)` - The encoder exited with status zero
/// * `Err(CoreError::EncodingFailed)` - The encoder exited non-zero
/// * `Err(CoreError::UnexpectedEncodingError)` - The encoder could not be
///   started or waited on
pub fn convert<S: EncoderSpawner + ?Sized>(
    spawner: &S,
    encoder: &Path,
    input: &Path,
    output_dir: &Path,
    preserve_audio: bool,
) -> CoreResult<ConvertResult> {
    let output_path = output_path_for(input, output_dir);
    let invocation = EncoderInvocation::build(encoder, input, &output_path, preserve_audio);
    run_invocation(spawner, &invocation)
}

/// Runs a prepared invocation and reports on its input and output files.
pub(crate) fn run_invocation<S: EncoderSpawner + ?Sized>(
    spawner: &S,
    invocation: &EncoderInvocation,
) -> CoreResult<ConvertResult> {
    let start_time = Instant::now();
    let input = invocation.input();
    let output_path = invocation.output();
    let filename = get_filename_safe(input)?;

    terminal::print_processing(&format!(
        "Converting '{}' to '{}'...",
        input.display(),
        output_path.display()
    ));
    log::debug!("Encoder command: {}", invocation);

    let status = spawner.run(invocation)?;
    if !status.success() {
        return Err(encoding_failed_error(input, status));
    }

    terminal::print_success(&format!(
        "Successfully converted '{}' to '{}'.",
        input.display(),
        output_path.display()
    ));

    Ok(ConvertResult {
        filename,
        input_path: input.to_path_buf(),
        input_size: get_file_size(input).unwrap_or_default(),
        output_size: get_file_size(output_path).unwrap_or_default(),
        output_path: output_path.to_path_buf(),
        duration: start_time.elapsed(),
    })
}
