use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn auspect_cmd() -> Command {
    Command::cargo_bin("auspect").expect("Failed to find auspect binary")
}

#[test]
fn test_help_describes_the_tool() -> Result<(), Box<dyn Error>> {
    auspect_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Inspects audio files"));
    Ok(())
}

#[test]
fn test_analyze_requires_a_file_argument() -> Result<(), Box<dyn Error>> {
    auspect_cmd().arg("analyze").assert().failure();
    Ok(())
}

#[test]
fn test_missing_ffprobe_is_fatal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input_file = dir.path().join("track.mp3");
    std::fs::write(&input_file, "dummy content")?;

    auspect_cmd()
        .arg("analyze")
        .arg(&input_file)
        .arg("--ffprobe")
        .arg("surely/this/does/not/exist/ffprobe")
        .assert()
        .failure()
        .stderr(contains("ffprobe not found"));
    Ok(())
}

#[test]
fn test_missing_input_file_is_reported_before_probing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    // Construction only requires the ffprobe path to exist on disk; the
    // missing target is rejected before anything would be spawned, so a
    // plain file is enough to stand in for the executable here.
    let fake_ffprobe = dir.path().join("ffprobe");
    std::fs::write(&fake_ffprobe, "not really ffprobe")?;

    auspect_cmd()
        .arg("analyze")
        .arg(dir.path().join("no-such-track.mp3"))
        .arg("--ffprobe")
        .arg(&fake_ffprobe)
        .assert()
        .failure()
        .stderr(contains("file does not exist"));
    Ok(())
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    const STUB_DOCUMENT: &str = r#"{
  "streams": [
    {
      "codec_type": "audio",
      "codec_name": "mp3",
      "sample_rate": "44100",
      "channels": 2,
      "bit_rate": "320000",
      "tags": { "encoder": "LAME 3.100" }
    }
  ],
  "format": {
    "format_name": "mp3",
    "nb_streams": 1,
    "duration": "231.400000"
  }
}"#;

    fn stub_ffprobe(dir: &std::path::Path, script_body: &str) -> PathBuf {
        let path = dir.join("ffprobe");
        std::fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_analyze_renders_labeled_report() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let stub = stub_ffprobe(dir.path(), &format!("cat <<'EOF'\n{STUB_DOCUMENT}\nEOF"));
        let input_file = dir.path().join("track.mp3");
        std::fs::write(&input_file, vec![0u8; 2048])?;

        auspect_cmd()
            .arg("analyze")
            .arg(&input_file)
            .arg("--ffprobe")
            .arg(&stub)
            .assert()
            .success()
            .stdout(contains("MP3"))
            .stdout(contains("44100 Hz"))
            .stdout(contains("stereo"))
            .stdout(contains("320 kbps"))
            .stdout(contains("3 minutes 51 seconds"))
            .stdout(contains("2.00 KB"));
        Ok(())
    }

    #[test]
    fn test_analyze_json_output_is_machine_readable() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let stub = stub_ffprobe(dir.path(), &format!("cat <<'EOF'\n{STUB_DOCUMENT}\nEOF"));
        let input_file = dir.path().join("track.mp3");
        std::fs::write(&input_file, vec![0u8; 512])?;

        let output = auspect_cmd()
            .arg("analyze")
            .arg(&input_file)
            .arg("--ffprobe")
            .arg(&stub)
            .arg("--json")
            .output()?;

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(report["codec"], "MP3");
        assert_eq!(report["encoder"], "LAME 3.100");
        assert_eq!(report["file_size"], "512 B");
        Ok(())
    }

    #[test]
    fn test_analyze_reports_unsupported_format() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let stub = stub_ffprobe(dir.path(), "exit 1");
        let input_file = dir.path().join("not-audio.txt");
        std::fs::write(&input_file, "plain text")?;

        auspect_cmd()
            .arg("analyze")
            .arg(&input_file)
            .arg("--ffprobe")
            .arg(&stub)
            .assert()
            .failure()
            .stderr(contains("not a valid/supported audio file"));
        Ok(())
    }

    #[test]
    fn test_tools_reports_version() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let stub = stub_ffprobe(dir.path(), "echo 'ffprobe version 6.1.1'");

        auspect_cmd()
            .arg("tools")
            .arg("--ffprobe")
            .arg(&stub)
            .assert()
            .success()
            .stdout(contains("ffprobe version 6.1.1"));
        Ok(())
    }
}
