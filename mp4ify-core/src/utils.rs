//! Small helpers shared by the converter and the run summary.

use crate::error::{CoreError, CoreResult};

use std::path::Path;

/// Renders elapsed seconds as `HH:MM:SS`, truncating fractions.
///
/// Hours are not wrapped at 24. Negative or non-finite input yields
/// `??:??:??`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "??:??:??".to_string();
    }

    let whole = seconds as u64;
    format!("{:02}:{:02}:{:02}", whole / 3600, whole % 3600 / 60, whole % 60)
}

/// Human-readable size using binary units, two decimals above 1 KiB.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// File name component of `path` as a string.
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CoreError::PathError(format!("No file name in path {}", path.display())))
}

pub fn get_file_size(path: &Path) -> CoreResult<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// Whole-percent shrinkage from `input_size` to `output_size`; 0 when the
/// output is not smaller or the input is empty.
#[must_use]
pub fn calculate_size_reduction(input_size: u64, output_size: u64) -> u64 {
    if input_size == 0 || output_size >= input_size {
        return 0;
    }
    let kept = u128::from(output_size) * 100 / u128::from(input_size);
    100 - kept as u64
}
