//! Implementation of the conversion run.
//!
//! Checks that ffmpeg is available, resolves the input argument into files
//! and an output directory, then hands the batch to mp4ify-core and prints
//! a summary.

use crate::cli::Cli;
use crate::error::CliResult;

use mp4ify_core::processing::BatchReport;
use mp4ify_core::terminal;
use mp4ify_core::utils::calculate_size_reduction;
use mp4ify_core::{
    CoreConfig, CoreConfigBuilder, EncoderSpawner, EventHandler, InputKind, JsonProgressHandler,
    ProcessSpawner, ResolvedInputs, check_dependency, format_bytes, format_duration, process_videos,
    resolve_inputs,
};

use log::debug;

/// Creates and validates a CoreConfig from CLI arguments.
fn create_core_config(args: &Cli) -> CliResult<CoreConfig> {
    let config = CoreConfigBuilder::new()
        .encoder(args.ffmpeg.clone())
        .preserve_audio(!args.no_audio)
        .jobs(usize::from(args.jobs))
        .build();

    config.validate()?;
    Ok(config)
}

/// Displays the resolved inputs and the settings the batch will run with.
fn display_initialization_info(args: &Cli, inputs: &ResolvedInputs, config: &CoreConfig) {
    terminal::print_section("INITIALIZATION");

    let input_label = match inputs.kind {
        InputKind::File => "Input file",
        InputKind::Directory => "Input directory",
    };
    terminal::print_status(input_label, &args.input_path.display().to_string(), false);
    terminal::print_status("Output dir", &inputs.output_dir.display().to_string(), false);
    terminal::print_status("Files", &inputs.files.len().to_string(), false);
    terminal::print_status(
        "Audio",
        if config.preserve_audio { "AAC 192k" } else { "removed" },
        false,
    );
    terminal::print_status("Encoder", &config.encoder.display().to_string(), false);
    if config.jobs > 1 {
        terminal::print_status("Jobs", &config.jobs.to_string(), false);
    }
}

/// Prints per-file results, failures and the batch totals.
fn handle_conversion_results(report: &BatchReport) {
    if report.converted.is_empty() {
        terminal::print_error(
            "No files converted",
            "No files were successfully converted",
            Some("Check the ffmpeg output above for details"),
        );
    } else {
        terminal::print_section("CONVERSION COMPLETE");
        terminal::print_success(&format!(
            "Successfully converted {} file(s)",
            report.converted.len()
        ));

        for result in &report.converted {
            let reduction = calculate_size_reduction(result.input_size, result.output_size);

            terminal::print_subsection(&result.filename);
            terminal::print_status("Time", &format_duration(result.duration.as_secs_f64()), false);
            terminal::print_status("Input size", &format_bytes(result.input_size), false);
            terminal::print_status("Output size", &format_bytes(result.output_size), false);
            terminal::print_status("Reduced by", &format!("{reduction}%"), true);
        }
    }

    if report.has_failures() {
        terminal::print_section("Failures");
        for failed in &report.failed {
            let line = format!("{}: {}", failed.input_path.display(), failed.error);
            if failed.error.is_per_file() {
                terminal::print_warning(&line);
            } else {
                terminal::print_error("Could not process file", &line, None);
            }
        }
    }

    terminal::print_section("Summary");
    terminal::print_status("Converted", &report.converted.len().to_string(), false);
    terminal::print_status("Failed", &report.failed.len().to_string(), report.has_failures());
    terminal::print_status("Total time", &format_duration(report.elapsed.as_secs_f64()), true);
}

/// Runs a conversion with the real ffmpeg process spawner.
///
/// Fails before touching any file if the encoder cannot be run.
pub fn run_convert(args: &Cli) -> CliResult<BatchReport> {
    debug!("Run started: {}", chrono::Local::now());

    let config = create_core_config(args)?;
    check_dependency(&config.encoder)?;

    let report = run_convert_with(&ProcessSpawner, args, &config)?;

    debug!("Finished at: {}", chrono::Local::now());
    Ok(report)
}

/// Resolves inputs and converts them with the given spawner.
///
/// Per-file failures are recorded in the returned report. Errors are
/// returned only for input resolution problems and invalid configuration.
pub fn run_convert_with<S: EncoderSpawner + ?Sized>(
    spawner: &S,
    args: &Cli,
    config: &CoreConfig,
) -> CliResult<BatchReport> {
    let inputs = resolve_inputs(&args.input_path, args.output_dir.as_deref())?;
    display_initialization_info(args, &inputs, config);

    let json_handler = args.json.then(JsonProgressHandler::new);
    let events = json_handler.as_ref().map(|h| h as &dyn EventHandler);

    terminal::print_section("CONVERSION");
    let report = process_videos(spawner, config, &inputs.files, &inputs.output_dir, events)?;

    handle_conversion_results(&report);
    Ok(report)
}
