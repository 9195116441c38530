use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

// Helper function to get the path to the compiled binary
fn mp4ify_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mp4ify").expect("Failed to find mp4ify binary");
    cmd.env("NO_COLOR", "1").env_remove("MP4IFY_FFMPEG").env_remove("RUST_LOG");
    cmd
}

/// Stand-in for ffmpeg that records its arguments, one invocation per line.
///
/// Answers `-version` with success. Any invocation mentioning "broken" exits
/// 1; everything else creates an empty file at the last argument.
#[cfg(unix)]
struct FakeEncoder {
    _dir: TempDir,
    path: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl FakeEncoder {
    fn new() -> Result<Self, Box<dyn Error>> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let path = dir.path().join("ffmpeg");
        let log = dir.path().join("calls.log");
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-version\" ]; then exit 0; fi\n\
             echo \"$*\" >> '{}'\n\
             for last in \"$@\"; do :; done\n\
             case \"$*\" in *broken*) exit 1 ;; esac\n\
             : > \"$last\"\n",
            log.display()
        );
        fs::write(&path, script)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

        Ok(Self { _dir: dir, path, log })
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn touch(dir: &Path, name: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, "dummy content")?;
    Ok(path)
}

#[test]
fn test_missing_encoder_exits_before_resolving_input() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    mp4ify_cmd()
        .arg(work.path().join("does_not_exist"))
        .arg("--ffmpeg")
        .arg(work.path().join("no-such-ffmpeg"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not installed"));

    Ok(())
}

#[test]
fn test_zero_jobs_is_rejected_by_parser() {
    mp4ify_cmd()
        .args(["videos", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(contains("invalid value '0'"));
}

#[cfg(unix)]
#[test]
fn test_invalid_extension_exits_with_error() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    let input = touch(work.path(), "notes.txt")?;

    mp4ify_cmd()
        .arg(&input)
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("must be a .mp4 or .mov file"));

    assert!(encoder.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_directory_without_matches_exits_with_error() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "c.txt")?;
    touch(work.path(), "movie.mkv")?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("No .mp4 or .mov files found"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_nonexistent_input_exits_with_error() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;

    mp4ify_cmd()
        .arg(work.path().join("missing.mp4"))
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("must be a valid file or directory"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_fatal_error_shown_when_only_errors_are_logged() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;

    mp4ify_cmd()
        .arg(work.path().join("missing.mp4"))
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .env("RUST_LOG", "error")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("must be a valid file or directory"));

    Ok(())
}

#[test]
fn test_missing_encoder_shown_when_only_errors_are_logged() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--ffmpeg")
        .arg(work.path().join("no-such-ffmpeg"))
        .env("RUST_LOG", "error")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not installed"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_directory_conversion_writes_outputs_next_to_inputs() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "a.mp4")?;
    touch(work.path(), "b.mov")?;
    touch(work.path(), "c.txt")?;
    fs::create_dir(work.path().join("sub"))?;
    touch(&work.path().join("sub"), "d.mp4")?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .success()
        .stderr(contains("Successfully converted"));

    assert!(work.path().join("a_h264.mp4").exists());
    assert!(work.path().join("b_h264.mp4").exists());
    assert!(!work.path().join("c_h264.mp4").exists());
    assert!(!work.path().join("sub").join("d_h264.mp4").exists());

    let calls = encoder.calls();
    assert_eq!(calls.len(), 2);
    let a = work.path().join("a.mp4");
    let a_out = work.path().join("a_h264.mp4");
    assert_eq!(
        calls[0],
        format!(
            "-i {} -c:v libx264 -preset fast -crf 23 -c:a aac -b:a 192k -movflags +faststart {}",
            a.display(),
            a_out.display()
        )
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_single_file_without_audio_into_new_output_dir() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    let input = touch(work.path(), "Clip.MOV")?;
    let out = work.path().join("out");

    mp4ify_cmd()
        .arg(&input)
        .arg("--no-audio")
        .arg("-o")
        .arg(&out)
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .success();

    let expected = out.join("Clip_h264.mp4");
    assert!(expected.exists());

    let calls = encoder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        format!(
            "-i {} -c:v libx264 -preset fast -crf 23 -an -movflags +faststart {}",
            input.display(),
            expected.display()
        )
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_file_does_not_stop_batch() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "a.mp4")?;
    touch(work.path(), "b_broken.mov")?;
    touch(work.path(), "c.mp4")?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .success()
        .code(0)
        .stderr(contains("Error during conversion"));

    assert_eq!(encoder.calls().len(), 3);
    assert!(work.path().join("a_h264.mp4").exists());
    assert!(!work.path().join("b_broken_h264.mp4").exists());
    assert!(work.path().join("c_h264.mp4").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_strict_mode_fails_on_any_failed_file() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "a.mp4")?;
    touch(work.path(), "broken.mp4")?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--strict")
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .failure()
        .code(1);

    assert_eq!(encoder.calls().len(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_encoder_from_environment_variable() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "a.mp4")?;

    mp4ify_cmd()
        .arg(work.path())
        .env("MP4IFY_FFMPEG", &encoder.path)
        .assert()
        .success();

    assert_eq!(encoder.calls().len(), 1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_json_events_on_stdout() -> Result<(), Box<dyn Error>> {
    let encoder = FakeEncoder::new()?;
    let work = tempdir()?;
    touch(work.path(), "a.mp4")?;

    mp4ify_cmd()
        .arg(work.path())
        .arg("--json")
        .arg("--ffmpeg")
        .arg(&encoder.path)
        .assert()
        .success()
        .stdout(contains("\"type\":\"batch_started\""))
        .stdout(contains("\"type\":\"conversion_complete\""))
        .stdout(contains("\"type\":\"batch_complete\""));

    Ok(())
}
