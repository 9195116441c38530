//! Console output for mp4ify runs.
//!
//! Every line goes through the `log` facade with [`TARGET`] as its target,
//! so the CLI logger can print them without a level tag. Regular lines are
//! info level; error lines are error level and survive a `RUST_LOG=error`
//! filter. Color is off when `NO_COLOR` is set.

use console::style;
use log::{error, info};
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

/// Log target shared by every line printed from this module.
pub const TARGET: &str = "mp4ify::terminal";

/// Width that status labels are padded to.
const LABEL_WIDTH: usize = 15;

/// Indentation depth of a printed line.
#[derive(Debug, Clone, Copy)]
pub enum OutputLevel {
    /// `===== TITLE =====` banners
    Section,
    /// Per-file and per-step lines
    Subsection,
    /// `label: value` rows
    Status,
}

impl OutputLevel {
    fn indent(self) -> &'static str {
        match self {
            OutputLevel::Section => "",
            OutputLevel::Subsection => "  ",
            OutputLevel::Status => "      ",
        }
    }
}

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Banner that opens a phase of the run (initialization, conversion, summary).
pub fn print_section(title: &str) {
    let title = title.to_uppercase();
    info!(target: TARGET, "");
    if color_enabled() {
        info!(target: TARGET, "===== {} =====", title.cyan());
    } else {
        info!(target: TARGET, "===== {title} =====");
    }
    info!(target: TARGET, "");
}

pub fn print_item(level: OutputLevel, symbol: Option<&str>, text: &str, bold: bool) {
    let indent = level.indent();
    let prefix = symbol.map(|sym| format!("{sym} ")).unwrap_or_default();

    if bold && color_enabled() {
        info!(target: TARGET, "{indent}{prefix}{}", style(text).bold());
    } else {
        info!(target: TARGET, "{indent}{prefix}{text}");
    }
}

/// `» message`, used when a file starts converting.
pub fn print_processing(message: &str) {
    print_item(OutputLevel::Subsection, Some("»"), message, true);
}

/// Bold heading for one file in the summary.
pub fn print_subsection(title: &str) {
    print_item(OutputLevel::Subsection, None, title, true);
}

pub fn print_success(message: &str) {
    if color_enabled() {
        info!(target: TARGET, "  ✓ {}", message.green());
    } else {
        info!(target: TARGET, "  ✓ {message}");
    }
}

/// Prints `label: value` with labels aligned on display width.
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let padding = " ".repeat(LABEL_WIDTH.saturating_sub(label.width()).max(1));
    let indent = OutputLevel::Status.indent();

    if highlight && color_enabled() {
        info!(target: TARGET, "{indent}{label}:{padding} {}", value.bold());
    } else {
        info!(target: TARGET, "{indent}{label}:{padding} {value}");
    }
}

/// Fatal error block: title, message and an optional hint.
///
/// Logged at error level so it is shown whatever info lines are filtered.
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if color_enabled() {
        error!(target: TARGET, "✗ {}", title.red().bold());
    } else {
        error!(target: TARGET, "✗ {title}");
    }
    error!(target: TARGET, "  Message:    {message}");
    if let Some(hint) = suggestion {
        error!(target: TARGET, "  Suggestion: {hint}");
    }
}

/// Non-fatal problem, such as one file in a batch failing.
pub fn print_warning(message: &str) {
    if color_enabled() {
        info!(target: TARGET, "  ⚠ {}", message.yellow());
    } else {
        info!(target: TARGET, "  ⚠ {message}");
    }
}
