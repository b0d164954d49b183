//! CLI end-to-end tests
//!
//! Tests for the tsharvest command-line interface.

mod common;

use assert_cmd::prelude::*;
use common::{sliding_window_capture, HarBuilder};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the tsharvest binary
#[allow(deprecated)]
fn tsharvest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tsharvest").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Get a tsharvest command that can be fed stdin
#[allow(deprecated)]
fn tsharvest_interactive_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("tsharvest").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
fn fake_ffmpeg(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    // Copies the input (third argument) to the last argument.
    let path = dir.join("fake-ffmpeg");
    fs::write(&path, "#!/bin/sh\nfor last; do :; done\ncp \"$3\" \"$last\"\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = tsharvest_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = tsharvest_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsharvest"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = tsharvest_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsharvest"));
}

#[test]
fn test_cli_check_tools_command() {
    let mut cmd = tsharvest_cmd();
    cmd.arg("check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"));
}

#[test]
fn test_cli_extract_help() {
    let mut cmd = tsharvest_cmd();
    cmd.args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract every segment"));
}

#[test]
fn test_cli_extract_writes_files() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());
    let out = temp.path().join("out");

    let mut cmd = tsharvest_cmd();
    cmd.arg("extract")
        .arg(&archive)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 segments and 3 manifests"))
        .stderr(predicate::str::contains("[notice] s5.ts was not captured"));

    assert_eq!(
        fs::read_to_string(out.join("o.lst")).unwrap(),
        "file s1.ts\nfile s2.ts\nfile s3.ts\nfile s4.ts\n"
    );
    assert!(out.join("o.m3u8").is_file());
    assert!(out.join("index.m3u8").is_file());
}

#[test]
fn test_cli_extract_nonexistent_archive() {
    let mut cmd = tsharvest_cmd();
    cmd.args(["extract", "/nonexistent/path/capture.har"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read archive"));
}

#[test]
fn test_cli_extract_malformed_archive_writes_nothing() {
    let temp = tempdir().unwrap();
    let archive = temp.path().join("capture.har");
    fs::write(&archive, "{\"log\": {\"pages\": []}}").unwrap();
    let out = temp.path().join("out");

    let mut cmd = tsharvest_cmd();
    cmd.arg("extract")
        .arg(&archive)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed archive"));

    assert!(!out.exists());
}

#[test]
fn test_cli_inspect_json() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());

    let mut cmd = tsharvest_cmd();
    let output = cmd.arg("inspect").arg(&archive).arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["segments_captured"], 4);
    assert_eq!(json["reconciled"], 5);
    assert_eq!(json["manifests"].as_array().unwrap().len(), 3);
    assert_eq!(json["missing"][0]["name"], "s5.ts");
}

#[test]
fn test_cli_inspect_text() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());

    let mut cmd = tsharvest_cmd();
    cmd.arg("inspect")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Segments captured: 4"))
        .stdout(predicate::str::contains("Reconciled: 5 segments, 00:00:20"))
        .stdout(predicate::str::contains("s5.ts"));
}

#[test]
fn test_cli_concat() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.ts"), b"AA").unwrap();
    fs::write(temp.path().join("b.ts"), b"B").unwrap();
    let list = temp.path().join("o.lst");
    fs::write(&list, "file b.ts\nfile a.ts\n").unwrap();
    let output = temp.path().join("o.ts");

    let mut cmd = tsharvest_cmd();
    cmd.arg("concat")
        .arg(&list)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 bytes"));

    assert_eq!(fs::read(&output).unwrap(), b"BAA");
}

#[test]
fn test_cli_clip_nonexistent_input() {
    let temp = tempdir().unwrap();
    let ffmpeg = temp.path().join("ffmpeg");
    fs::write(&ffmpeg, "").unwrap();
    let config = temp.path().join("tsharvest.toml");
    fs::write(&config, format!("[tools]\nffmpeg_path = {:?}\n", ffmpeg)).unwrap();

    let mut cmd = tsharvest_cmd();
    cmd.arg("--config")
        .arg(&config)
        .args(["clip", "/nonexistent/movie.mp4", "00:00:01", "00:00:02"])
        .arg(temp.path().join("cut.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_invalid_config() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("tsharvest.toml");
    fs::write(&config, "[output]\nstream_name = \"\"\n").unwrap();

    let mut cmd = tsharvest_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("check-tools")
        .assert()
        .failure()
        .stderr(predicate::str::contains("output.stream_name"));
}

#[cfg(unix)]
#[test]
fn test_cli_remux_complete_capture() {
    let temp = tempdir().unwrap();
    let archive = HarBuilder::new()
        .manifest(
            "https://cdn.example.com/live/index.m3u8",
            &common::live_manifest(1, &["s1.ts", "s2.ts"]),
        )
        .segment("https://cdn.example.com/live/s1.ts", b"[s1]")
        .segment("https://cdn.example.com/live/s2.ts", b"[s2]")
        .write_to(temp.path());
    let config = temp.path().join("tsharvest.toml");
    fs::write(
        &config,
        format!("[tools]\nffmpeg_path = {:?}\n", fake_ffmpeg(temp.path())),
    )
    .unwrap();
    let output = temp.path().join("movie.mp4");

    let mut cmd = tsharvest_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("remux")
        .arg(&archive)
        .arg(&output)
        .arg("--out-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Output:"));

    assert_eq!(fs::read(temp.path().join("o.ts")).unwrap(), b"[s1][s2]");
    assert_eq!(fs::read(&output).unwrap(), b"[s1][s2]");
}

#[cfg(unix)]
#[test]
fn test_cli_remux_abort_on_missing() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());
    let config = temp.path().join("tsharvest.toml");
    fs::write(
        &config,
        format!("[tools]\nffmpeg_path = {:?}\n", fake_ffmpeg(temp.path())),
    )
    .unwrap();
    let output = temp.path().join("movie.mp4");

    let mut cmd = tsharvest_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("remux")
        .arg(&archive)
        .arg(&output)
        .arg("--out-dir")
        .arg(temp.path())
        .arg("--abort-on-missing")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped before remux"))
        .stderr(predicate::str::contains("[notice] s5.ts was not captured"));

    assert!(temp.path().join("o.ts").is_file());
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_cli_remux_prompt_declined() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());
    let config = temp.path().join("tsharvest.toml");
    fs::write(
        &config,
        format!("[tools]\nffmpeg_path = {:?}\n", fake_ffmpeg(temp.path())),
    )
    .unwrap();
    let output = temp.path().join("movie.mp4");

    let mut cmd = tsharvest_interactive_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("remux")
        .arg(&archive)
        .arg(&output)
        .arg("--out-dir")
        .arg(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Continue anyway?"));

    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_cli_remux_yes_continues() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());
    let config = temp.path().join("tsharvest.toml");
    fs::write(
        &config,
        format!("[tools]\nffmpeg_path = {:?}\n", fake_ffmpeg(temp.path())),
    )
    .unwrap();
    let output = temp.path().join("movie.mp4");

    let mut cmd = tsharvest_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("remux")
        .arg(&archive)
        .arg(&output)
        .arg("--out-dir")
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success();

    assert_eq!(fs::read(&output).unwrap(), b"[s1][s2][s3][s4]");
}

#[cfg(unix)]
#[test]
fn test_cli_remux_prompt_accepted() {
    let temp = tempdir().unwrap();
    let archive = sliding_window_capture().write_to(temp.path());
    let config = temp.path().join("tsharvest.toml");
    fs::write(
        &config,
        format!("[tools]\nffmpeg_path = {:?}\n", fake_ffmpeg(temp.path())),
    )
    .unwrap();
    let output = temp.path().join("movie.mp4");

    let mut cmd = tsharvest_interactive_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("remux")
        .arg(&archive)
        .arg(&output)
        .arg("--out-dir")
        .arg(temp.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output:"));

    assert_eq!(fs::read(&output).unwrap(), b"[s1][s2][s3][s4]");
}
