//! Integration tests for the MiniTESK CLI.
//!
//! These tests invoke the `minitesk` binary as a subprocess and check
//! exit codes, stdout, stderr and the files written.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EUCLID_TEXT: &str = "\
\tadd $t0, $zero, $zero
\taddi $t1, $zero, 99
\tadd $t2, $zero, $zero
";

#[allow(deprecated)]
fn minitesk() -> Command {
    let mut cmd = Command::cargo_bin("minitesk").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Helper: write a text program into `dir`, returning its path.
fn write_source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage() {
    minitesk()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage: minitesk"));
}

#[test]
fn help_lists_commands() {
    minitesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate").and(predicate::str::contains("disassemble")));
}

#[test]
fn unknown_command_fails() {
    minitesk().arg("frobnicate").assert().failure().code(2);
}

// ---- List ----

#[test]
fn list_shows_euclid() {
    minitesk()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("euclid"));
}

// ---- Generate ----

#[test]
fn generate_euclid() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .args(["generate", "euclid", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("generated euclid (3 instructions)"));

    let text = fs::read_to_string(dir.path().join("test_0000.s")).unwrap();
    assert!(text.starts_with("#===="));
    assert!(text.contains("# Template: euclid"));
    assert!(text.contains("= Main Code ="));
    assert!(text.ends_with(EUCLID_TEXT));
}

#[test]
fn generate_all_with_binary() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .args(["generate", "--all", "--binary", "-o"])
        .arg(dir.path())
        .assert()
        .success();

    let bytes = fs::read(dir.path().join("test_0000.bin")).unwrap();
    assert_eq!(
        bytes,
        [0x00, 0x00, 0x40, 0x20, 0x20, 0x09, 0x00, 0x63, 0x00, 0x00, 0x50, 0x20]
    );
}

#[test]
fn generate_to_stdout_without_comments() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .args(["generate", "euclid", "--stdout", "--no-comments", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(EUCLID_TEXT);
}

#[test]
fn generate_reads_settings_file() {
    let dir = TempDir::new().unwrap();
    let config = write_source(
        &dir,
        "minitesk.toml",
        "code_file_prefix = \"euclid\"\ncode_file_extension = \"asm\"\ncomment_token = \"//\"\n",
    );
    minitesk()
        .args(["generate", "euclid", "--config"])
        .arg(&config)
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("euclid_0000.asm")).unwrap();
    assert!(text.contains("// Template: euclid"));
}

#[test]
fn generate_reads_environment() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .env("MINITESK_CODE_FILE_PREFIX", "env")
        .args(["generate", "euclid", "-o"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(dir.path().join("env_0000.s").exists());
}

#[test]
fn generate_unknown_template_exits_1() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .args(["generate", "nosuch", "-o"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown template 'nosuch'"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn generate_without_names_exits_1() {
    minitesk()
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("template names or --all"));
}

#[test]
fn generate_missing_config_exits_1() {
    minitesk()
        .args(["generate", "euclid", "--config", "/nonexistent/minitesk.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid settings"));
}

#[test]
fn verbose_generate_logs_written_files() {
    let dir = TempDir::new().unwrap();
    minitesk()
        .args(["-v", "generate", "euclid", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote test program"));
}

// ---- Assemble / disassemble ----

#[test]
fn assemble_then_disassemble() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "euclid.s", EUCLID_TEXT);

    minitesk()
        .arg("assemble")
        .arg(&source)
        .assert()
        .success()
        .stderr(predicate::str::contains("assembled 3 instructions (12 bytes)"));

    let binary = dir.path().join("euclid.bin");
    assert!(binary.exists());

    minitesk()
        .arg("disassemble")
        .arg(&binary)
        .assert()
        .success()
        .stdout("add $t0, $zero, $zero\naddi $t1, $zero, 99\nadd $t2, $zero, $zero\n");
}

#[test]
fn little_endian_roundtrip_and_listing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "euclid.s", EUCLID_TEXT);
    let binary = dir.path().join("out.le");

    minitesk()
        .arg("assemble")
        .arg(&source)
        .arg("-o")
        .arg(&binary)
        .arg("--little-endian")
        .assert()
        .success();
    assert_eq!(&fs::read(&binary).unwrap()[..4], &[0x20, 0x40, 0x00, 0x00]);

    minitesk()
        .arg("disassemble")
        .arg(&binary)
        .args(["--little-endian", "--listing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00000004:  20090063  addi $t1, $zero, 99"));
}

#[test]
fn assemble_error_reports_line() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "bad.s", "add $t0, $zero, $zero\nmul $t0, $t1, $t2\n");
    minitesk()
        .arg("assemble")
        .arg(&source)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2: unknown instruction 'mul'"));
}

#[test]
fn disassemble_rejects_truncated_binary() {
    let dir = TempDir::new().unwrap();
    let binary = write_source(&dir, "short.bin", "abc");
    minitesk()
        .arg("disassemble")
        .arg(&binary)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid binary"));
}

#[test]
fn missing_input_exits_1() {
    minitesk()
        .args(["assemble", "/nonexistent/input.s"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

// ---- Run ----

#[test]
fn run_prints_registers() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "euclid.s", EUCLID_TEXT);
    minitesk()
        .arg("run")
        .arg(&source)
        .assert()
        .success()
        .stdout("$t1 = 0x00000063\n");
}

#[test]
fn run_overflow_exits_3() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        &dir,
        "overflow.s",
        "lui $t0, 0x7fff\nori $t0, $t0, 0xffff\naddi $t0, $t0, 1\n",
    );
    minitesk()
        .arg("run")
        .arg(&source)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "runtime error: integer overflow in addi at instruction 2",
        ));
}
