// ============================================================================
// mp4ify-core/src/processing/batch.rs
// ============================================================================
//
// BATCH PROCESSING: Converting Every Resolved Input
//
// WORKFLOW:
// 1. Validate configuration
// 2. Mark inputs whose output path an earlier input already claims
//    (`a.mp4` and `a.MOV` both map to `a_h264.mp4`)
// 3. For each input file (in order, or on a bounded worker pool):
//    a. Fail claimed duplicates without running the encoder
//    b. Emit ConversionStarted
//    c. Run the encoder, with stdin detached when jobs run in parallel
//    d. Record the result; a failure is logged and the batch moves on
// 4. Return a BatchReport with successes and failures in input order
//
// Per-file errors never fail the batch. The only Err returned from
// process_videos is for invalid configuration or thread pool setup.

use crate::ConvertResult;
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventHandler};
use crate::external::{EncoderInvocation, EncoderSpawner, output_path_for};
use crate::processing::convert::run_invocation;

use rayon::prelude::*;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// An input that could not be converted, with the reason.
#[derive(Debug)]
pub struct FailedConversion {
    pub input_path: PathBuf,
    pub error: CoreError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertResult>,
    pub failed: Vec<FailedConversion>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Number of worker threads for `requested` jobs, capped at available cores.
#[must_use]
pub fn effective_jobs(requested: usize) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    requested.clamp(1, cores.max(1))
}

/// Converts every file in `files` into `output_dir`.
///
/// `output_dir` must already exist (see [`crate::resolve_inputs`]).
///
/// # Examples
///
/// ```rust,no_run
/// use mp4ify_core::{CoreConfig, ProcessSpawner, process_videos, resolve_inputs};
/// use std::path::Path;
///
/// let config = CoreConfig::default();
/// let inputs = resolve_inputs(Path::new("/videos"), None).unwrap();
/// let report = process_videos(&ProcessSpawner, &config, &inputs.files, &inputs.output_dir, None).unwrap();
/// println!("{} converted, {} failed", report.converted.len(), report.failed.len());
/// ```
pub fn process_videos<S: EncoderSpawner + ?Sized>(
    spawner: &S,
    config: &CoreConfig,
    files: &[PathBuf],
    output_dir: &Path,
    events: Option<&dyn EventHandler>,
) -> CoreResult<BatchReport> {
    config.validate()?;

    let start_time = Instant::now();
    let jobs = effective_jobs(config.jobs);
    let emit = |event: Event| {
        if let Some(handler) = events {
            handler.handle(&event);
        }
    };

    emit(Event::BatchStarted {
        total_files: files.len(),
        output_dir: output_dir.to_path_buf(),
        jobs,
    });

    let parallel = jobs > 1 && files.len() > 1;

    let mut claimed = HashSet::new();
    let duplicates: Vec<bool> = files
        .iter()
        .map(|input| !claimed.insert(output_path_for(input, output_dir)))
        .collect();

    let convert_one = |(input, &duplicate): (&PathBuf, &bool)| -> CoreResult<ConvertResult> {
        let output_file = output_path_for(input, output_dir);

        if duplicate {
            let error = CoreError::DuplicateOutput {
                input: input.clone(),
                output: output_file,
            };
            log::error!("Skipping conversion: {}", error);
            emit(Event::ConversionFailed {
                input_file: input.clone(),
                message: error.to_string(),
            });
            return Err(error);
        }

        emit(Event::ConversionStarted {
            input_file: input.clone(),
            output_file: output_file.clone(),
        });

        let mut invocation =
            EncoderInvocation::build(&config.encoder, input, &output_file, config.preserve_audio);
        if parallel {
            invocation = invocation.with_null_stdin();
        }

        let result = run_invocation(spawner, &invocation);
        match &result {
            Ok(done) => emit(Event::ConversionComplete {
                input_file: done.input_path.clone(),
                output_file: done.output_path.clone(),
                input_size: done.input_size,
                output_size: done.output_size,
                elapsed: done.duration,
            }),
            Err(e) => {
                log::error!("Error during conversion: {}", e);
                emit(Event::ConversionFailed {
                    input_file: input.clone(),
                    message: e.to_string(),
                });
            }
        }
        result
    };

    let outcomes: Vec<CoreResult<ConvertResult>> = if !parallel {
        files.iter().zip(&duplicates).map(convert_one).collect()
    } else {
        log::info!("Converting {} files with {} concurrent jobs", files.len(), jobs);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize thread pool: {}", e)))?;
        pool.install(|| {
            files
                .par_iter()
                .zip(duplicates.par_iter())
                .map(convert_one)
                .collect::<Vec<_>>()
        })
    };

    let mut report = BatchReport::default();
    for (input, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(result) => report.converted.push(result),
            Err(error) => report.failed.push(FailedConversion {
                input_path: input.clone(),
                error,
            }),
        }
    }
    report.elapsed = start_time.elapsed();

    emit(Event::BatchComplete {
        succeeded: report.converted.len(),
        failed: report.failed.len(),
        elapsed: report.elapsed,
    });

    Ok(report)
}
