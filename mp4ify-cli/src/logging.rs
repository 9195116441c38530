// ============================================================================
// mp4ify-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Configuration for the CLI
//
// Terminal lines (mp4ify_core::terminal) and other info lines are printed
// bare because they carry the user-facing output. Other levels get a level
// tag, and a timestamp in verbose mode. RUST_LOG overrides the default filter.

use log::Level;
use mp4ify_core::terminal;
use std::io::Write;

/// Installs the global logger. Logs go to stderr.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(move |buf, record| match record.level() {
            _ if record.target() == terminal::TARGET => writeln!(buf, "{}", record.args()),
            Level::Info => writeln!(buf, "{}", record.args()),
            level if verbose => writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                level,
                record.args()
            ),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();
}
