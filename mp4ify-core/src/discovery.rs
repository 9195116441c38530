//! File discovery module for resolving the videos a run will convert.
//!
//! Input may be a single file or a directory. Directories are scanned at the
//! top level only; subdirectories are never descended into. Only `.mp4` and
//! `.mov` files (case-insensitive) are eligible.

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Whether the input argument named a single file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

/// Files to convert and the directory outputs are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub kind: InputKind,
    pub files: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

/// Returns true when the path carries an allowed video extension.
///
/// Only the name is inspected; the file need not exist.
#[must_use]
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Finds video files eligible for conversion in the specified directory.
///
/// Scans the top level of `input_dir` for regular files with a supported
/// extension and returns them sorted by path.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The discovered files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoMatchingFiles)` - If no eligible files are found
///
/// # Examples
///
/// ```rust,no_run
/// use mp4ify_core::find_processable_files;
/// use std::path::Path;
///
/// match find_processable_files(Path::new("/path/to/videos")) {
///     Ok(files) => println!("Found {} video files", files.len()),
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.is_file() && is_supported_video(&path)).then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoMatchingFiles(input_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Resolves the input argument into files to convert and an output directory.
///
/// When `output_dir` is `None` outputs land next to the inputs: the file's
/// parent directory for a single file, the directory itself otherwise. The
/// effective output directory is created (with parents) before returning.
pub fn resolve_inputs(input_path: &Path, output_dir: Option<&Path>) -> CoreResult<ResolvedInputs> {
    let (kind, files, default_output_dir) = if input_path.is_file() {
        if !is_supported_video(input_path) {
            return Err(CoreError::InvalidInputKind(input_path.to_path_buf()));
        }
        let parent = input_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (InputKind::File, vec![input_path.to_path_buf()], parent)
    } else if input_path.is_dir() {
        let files = find_processable_files(input_path)?;
        (InputKind::Directory, files, input_path.to_path_buf())
    } else {
        return Err(CoreError::InvalidPath(input_path.to_path_buf()));
    };

    let output_dir = output_dir.map_or(default_output_dir, Path::to_path_buf);
    fs::create_dir_all(&output_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    log::debug!(
        "Resolved {} input file(s) from {:?} '{}', output directory '{}'",
        files.len(),
        kind,
        input_path.display(),
        output_dir.display()
    );

    Ok(ResolvedInputs {
        kind,
        files,
        output_dir,
    })
}
