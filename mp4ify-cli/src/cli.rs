// mp4ify-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use mp4ify_core::config::DEFAULT_ENCODER;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mp4ify: Convert MP4 or MOV files to MP4 with H.264 video",
    long_about = "Converts .mp4/.mov files (a single file or every matching file in a \
                  directory) to MP4 with H.264 video and AAC audio using ffmpeg. \
                  Outputs are named <name>_h264.mp4."
)]
pub struct Cli {
    /// Input file or directory containing .mp4/.mov files
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output directory (defaults to the input file's directory, or the input directory)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Remove audio from the output files
    #[arg(long, default_value_t = false)]
    pub no_audio: bool,

    /// ffmpeg binary to run (name on PATH or a path)
    #[arg(long = "ffmpeg", value_name = "PATH", env = "MP4IFY_FFMPEG", default_value = DEFAULT_ENCODER)]
    pub ffmpeg: PathBuf,

    /// Number of files to convert concurrently (capped at available CPU cores)
    #[arg(short = 'j', long, value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Exit with status 1 if any file fails to convert
    #[arg(long)]
    pub strict: bool,

    /// Write JSON progress events to stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::parse_from(["mp4ify", "videos"]);

        assert_eq!(cli.input_path, PathBuf::from("videos"));
        assert!(cli.output_dir.is_none());
        assert!(!cli.no_audio);
        assert_eq!(cli.jobs, 1);
        assert!(!cli.strict);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "mp4ify",
            "Clip.MOV",
            "-o",
            "/out",
            "--no-audio",
            "--ffmpeg",
            "/opt/ffmpeg",
            "-j",
            "3",
            "--strict",
            "--json",
            "-v",
        ]);

        assert_eq!(cli.input_path, PathBuf::from("Clip.MOV"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/out")));
        assert!(cli.no_audio);
        assert_eq!(cli.ffmpeg, PathBuf::from("/opt/ffmpeg"));
        assert_eq!(cli.jobs, 3);
        assert!(cli.strict);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(Cli::try_parse_from(["mp4ify", "videos", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["mp4ify"]).is_err());
    }
}
