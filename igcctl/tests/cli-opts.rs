use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::NamedTempFile;

const BIN: &str = "igcctl";

const SAMPLE: &str = "AXCT7bd1c8a1aa8f2b3\r\n\
HFDTE020715\r\n\
HFPLTPILOTINCHARGE: Miguel Angel Gordillo\r\n\
HFGTYGLIDERTYPE:RV8\r\n\
HFGIDGLIDERID:EC-XLL\r\n\
B1101355206343N00006198WA0058700558\r\n\
B1101455206259N00006295WA0059300556\r\n\
B1101555206300N00006061WA0059300556\r\n";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

fn empty_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"version = 1\n").unwrap();
    file
}

fn cmd(cfg: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-c").arg(cfg.path());
    cmd
}

#[test]
fn test_empty_args() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.assert().failure();
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version_opt() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-V").assert().failure();
}

#[test]
fn test_version_keyword() {
    let cfg = empty_config();
    cmd(&cfg).arg("version").assert().success();
}

#[test]
fn test_bad_keyword() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("bouh").assert().failure();
}

#[test]
fn test_list_empty() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("list").assert().failure();
}

#[test]
fn test_list_fields() {
    let cfg = empty_config();
    cmd(&cfg)
        .arg("list")
        .arg("fields")
        .assert()
        .success()
        .stdout(contains("track_length"))
        .stdout(contains("glider_id"));
}

#[test]
fn test_info() {
    let mut cfg = NamedTempFile::new().unwrap();
    cfg.write_all(b"version = 1\ninfo = \"Test service\"\n").unwrap();
    cmd(&cfg)
        .arg("info")
        .assert()
        .success()
        .stdout(contains("\"uptime\": \"P0Y0D0H0M"))
        .stdout(contains("Test service"))
        .stdout(contains("\"version\": \"v"));
}

#[test]
fn test_bad_config_version() {
    let mut cfg = NamedTempFile::new().unwrap();
    cfg.write_all(b"version = 99\n").unwrap();
    cmd(&cfg).arg("info").assert().failure();
}

#[test]
fn test_ingest_needs_url() {
    let cfg = empty_config();
    cmd(&cfg).arg("ingest").assert().failure();
}

#[test]
fn test_ingest_file() {
    let cfg = empty_config();
    let igc = sample_file();
    let path = igc.path().to_string_lossy().to_string();

    cmd(&cfg)
        .arg("ingest")
        .arg(&path)
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("new"))
        .stdout(contains("duplicate"))
        .stdout(contains("Stored: [1]"));
}

#[test]
fn test_ingest_missing_file() {
    let cfg = empty_config();
    cmd(&cfg)
        .arg("ingest")
        .arg("/nonexistent/track.igc")
        .assert()
        .failure()
        .stdout(contains("failed"));
}

#[test]
fn test_track_field() {
    let cfg = empty_config();
    let igc = sample_file();

    cmd(&cfg)
        .arg("track")
        .arg("-i")
        .arg("1")
        .arg("-f")
        .arg("PILOT")
        .arg(igc.path())
        .assert()
        .success()
        .stdout(contains("Miguel Angel Gordillo"));
}

#[test]
fn test_track_json() {
    let cfg = empty_config();
    let igc = sample_file();

    cmd(&cfg)
        .args(["track", "--json", "-i", "1"])
        .arg(igc.path())
        .assert()
        .success()
        .stdout(contains("\"h_date\": \"2015-07-02\""))
        .stdout(contains("\"glider\": \"RV8\""));
}

#[test]
fn test_track_not_found() {
    let cfg = empty_config();
    let igc = sample_file();

    cmd(&cfg)
        .args(["track", "-i", "2"])
        .arg(igc.path())
        .assert()
        .failure();
}

#[test]
fn test_track_invalid() {
    let cfg = empty_config();
    let igc = sample_file();

    cmd(&cfg)
        .args(["track", "-i", "abc"])
        .arg(igc.path())
        .assert()
        .failure();
    cmd(&cfg)
        .args(["track", "-i", "1", "-f", "bad!"])
        .arg(igc.path())
        .assert()
        .failure();
    cmd(&cfg)
        .args(["track", "-i", "1", "-f", "wingspan"])
        .arg(igc.path())
        .assert()
        .failure();
}
