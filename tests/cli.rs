use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const FIXTURE: &str = "123400000000000000000000000000050000000000000000000000000006789";

// 2^256, one past the widest encodable value.
const TOO_WIDE: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639936";

fn cmd() -> Command {
    Command::cargo_bin("contract-check").unwrap()
}

fn bin_path(dir: &TempDir) -> String {
    dir.path().join("serialized.bin").display().to_string()
}

#[test]
fn write_then_read_exits_zero_silently() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd().args(["write", &path]).assert().success().stdout("");
    cmd().args(["read", &path]).assert().success().stdout("");
}

#[test]
fn round_trip_with_explicit_value() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd()
        .args(["write", &path, "--value", "42"])
        .assert()
        .success();
    cmd()
        .args(["read", &path, "--value", "42"])
        .assert()
        .success();
}

#[test]
fn mismatch_exits_one_and_names_both_values() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd().args(["write", &path]).assert().success();
    cmd()
        .args(["read", &path, "--value", "42"])
        .assert()
        .code(1)
        .stderr(contains("mismatch"))
        .stderr(contains("42"))
        .stderr(contains(FIXTURE));
}

#[test]
fn read_missing_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bin").display().to_string();

    cmd()
        .args(["read", &path])
        .assert()
        .code(2)
        .stderr(contains("I/O error"));
}

#[test]
fn read_malformed_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);
    std::fs::write(dir.path().join("serialized.bin"), [0x0A, 0x7F]).unwrap();

    cmd()
        .args(["read", &path])
        .assert()
        .code(2)
        .stderr(contains("decode error"));
}

#[test]
fn write_value_too_wide_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd()
        .args(["write", &path, "--value", TOO_WIDE])
        .assert()
        .code(2)
        .stderr(contains("bits"));
}

#[test]
fn write_rejects_non_decimal_value() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd()
        .args(["write", &path, "--value", "not-a-number"])
        .assert()
        .code(2)
        .stderr(contains("invalid scalar value"));
}

#[test]
fn json_report_on_match() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd().args(["write", &path]).assert().success();
    cmd()
        .args(["--json", "read", &path])
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains(FIXTURE));
}

#[test]
fn json_report_on_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = bin_path(&dir);

    cmd().args(["write", &path]).assert().success();
    cmd()
        .args(["--json", "read", &path, "--value", "7"])
        .assert()
        .code(1)
        .stdout(contains("\"ok\": false"))
        .stdout(contains("\"expected\": \"7\""));
}
