//! ffmpeg argument building.
//!
//! The command line produced here is fixed and must not gain extra flags:
//!
//! ```text
//! <encoder> -i <input> -c:v libx264 -preset fast -crf 23
//!   [-c:a aac -b:a 192k | -an] -movflags +faststart <output>
//! ```

use crate::config::{
    AUDIO_BITRATE, AUDIO_CODEC, MOVFLAGS, OUTPUT_SUFFIX, VIDEO_CODEC, VIDEO_CRF, VIDEO_PRESET,
};

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Derives `<stem>_h264.mp4` inside `output_dir`.
///
/// The input extension is dropped whatever its case, so `Clip.MOV`
/// becomes `Clip_h264.mp4`.
#[must_use]
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    output_dir.join(name)
}

/// One encoder command line: the program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderInvocation {
    program: PathBuf,
    input: PathBuf,
    output: PathBuf,
    args: Vec<OsString>,
    null_stdin: bool,
}

impl EncoderInvocation {
    /// Builds the conversion command for a single input.
    #[must_use]
    pub fn build(program: &Path, input: &Path, output: &Path, preserve_audio: bool) -> Self {
        let mut args: Vec<OsString> = vec!["-i".into(), input.as_os_str().to_os_string()];

        args.extend(["-c:v", VIDEO_CODEC, "-preset", VIDEO_PRESET, "-crf"].map(OsString::from));
        args.push(VIDEO_CRF.to_string().into());

        if preserve_audio {
            args.extend(["-c:a", AUDIO_CODEC, "-b:a", AUDIO_BITRATE].map(OsString::from));
        } else {
            args.push("-an".into());
        }

        args.extend(["-movflags", MOVFLAGS].map(OsString::from));
        args.push(output.as_os_str().to_os_string());

        Self {
            program: program.to_path_buf(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            args,
            null_stdin: false,
        }
    }

    /// Detaches the child from the terminal's stdin.
    ///
    /// Used when several encoders run at once so none of them can read
    /// keystrokes meant for another. The argument list is unchanged.
    #[must_use]
    pub fn with_null_stdin(mut self) -> Self {
        self.null_stdin = true;
        self
    }

    pub fn stdin_is_null(&self) -> bool {
        self.null_stdin
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Arguments in order, excluding the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as strings, for logging and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// True if any argument equals `arg` exactly.
    pub fn contains_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Creates a `Command` ready to spawn.
    ///
    /// stdout and stderr are inherited; stdin is too unless
    /// [`with_null_stdin`](Self::with_null_stdin) was applied.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if self.null_stdin {
            cmd.stdin(Stdio::null());
        }
        cmd
    }
}

impl fmt::Display for EncoderInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(preserve_audio: bool) -> EncoderInvocation {
        EncoderInvocation::build(
            Path::new("ffmpeg"),
            Path::new("/in/a.mp4"),
            Path::new("/out/a_h264.mp4"),
            preserve_audio,
        )
    }

    #[test]
    fn full_command_line_with_audio() {
        let inv = build(true);
        assert_eq!(
            inv.args_lossy(),
            vec![
                "-i", "/in/a.mp4", "-c:v", "libx264", "-preset", "fast", "-crf", "23",
                "-c:a", "aac", "-b:a", "192k", "-movflags", "+faststart", "/out/a_h264.mp4",
            ]
        );
        assert!(!inv.contains_arg("-an"));
    }

    #[test]
    fn full_command_line_without_audio() {
        let inv = build(false);
        assert_eq!(
            inv.args_lossy(),
            vec![
                "-i", "/in/a.mp4", "-c:v", "libx264", "-preset", "fast", "-crf", "23",
                "-an", "-movflags", "+faststart", "/out/a_h264.mp4",
            ]
        );
        assert!(!inv.contains_arg("-c:a"));
        assert!(!inv.contains_arg("-b:a"));
    }

    #[test]
    fn display_joins_program_and_args() {
        let inv = build(false);
        assert_eq!(
            inv.to_string(),
            "ffmpeg -i /in/a.mp4 -c:v libx264 -preset fast -crf 23 -an -movflags +faststart /out/a_h264.mp4"
        );
    }

    #[test]
    fn output_name_drops_extension_case_insensitively() {
        let out = Path::new("/out");
        assert_eq!(output_path_for(Path::new("/in/Clip.MOV"), out), PathBuf::from("/out/Clip_h264.mp4"));
        assert_eq!(output_path_for(Path::new("/in/a.mp4"), out), PathBuf::from("/out/a_h264.mp4"));
        assert_eq!(
            output_path_for(Path::new("/in/trip.day1.mov"), out),
            PathBuf::from("/out/trip.day1_h264.mp4")
        );
    }

    #[test]
    fn command_carries_program_and_args() {
        let inv = build(true);
        let cmd = inv.to_command();
        assert_eq!(cmd.get_program(), "ffmpeg");
        assert_eq!(cmd.get_args().count(), inv.args().len());
    }

    #[test]
    fn null_stdin_leaves_arguments_alone() {
        let inherited = build(true);
        let detached = build(true).with_null_stdin();

        assert!(!inherited.stdin_is_null());
        assert!(detached.stdin_is_null());
        assert_eq!(detached.args(), inherited.args());
        assert_eq!(detached.to_string(), inherited.to_string());
    }
}
