// mp4ify-cli/src/main.rs
//
// Entry point for the mp4ify binary.
//
// Parses arguments, installs the logger, runs the conversion and maps the
// outcome to a process exit code:
// - 0 when the batch ran, even if individual files failed
// - 1 on a fatal error (missing ffmpeg, bad input path, no matching files)
// - 1 when --strict is set and any file failed

use clap::Parser;
use mp4ify_cli::error::suggestion_for;
use mp4ify_cli::logging::init_logging;
use mp4ify_cli::{Cli, run_convert};
use mp4ify_core::terminal;

use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run_convert(&cli) {
        Ok(report) => {
            if cli.strict && report.has_failures() {
                log::error!(
                    "{} of {} file(s) failed to convert",
                    report.failed.len(),
                    report.total()
                );
                process::exit(1);
            }
        }
        Err(e) => {
            terminal::print_error("Error", &e.to_string(), suggestion_for(&e));
            process::exit(1);
        }
    }
}
