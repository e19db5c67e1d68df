//! The `kemba` binary, driven as a subprocess with a clean environment.

use std::io::Write;
use std::process::{Command, Output, Stdio};

mod common;
use common::assert_matches;

fn kemba() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kemba"));
    cmd.env_clear();
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().unwrap()
}

fn run_with_stdin(cmd: &mut Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes).lines().map(str::to_string).collect()
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_reports_enabled_and_color() {
    let out = run(kemba().env("DEBUG", "svc:*").args(["check", "svc:db", "other", "test:kemba"]));
    assert!(out.status.success());

    let stdout = lines(&out.stdout);
    assert_eq!(stdout.len(), 4);
    assert_eq!(stdout[0], "allow-list: svc:*");
    assert_eq!(stdout[1], "svc:db\tenabled\tcolor 203 (palette #65)");
    assert_matches(r"^other\tdisabled\tcolor \d+ \(palette #\d+\)$", &stdout[2]);
    assert_eq!(stdout[3], "test:kemba\tdisabled\tcolor 160 (palette #40)");
}

#[test]
fn test_check_joins_debug_and_kemba() {
    let out = run(
        kemba()
            .env("DEBUG", "a:*")
            .env("KEMBA", "b:*")
            .args(["check", "b:x"]),
    );
    let stdout = lines(&out.stdout);
    assert_eq!(stdout[0], "allow-list: a:*,b:*");
    assert!(stdout[1].starts_with("b:x\tenabled\t"));
}

#[test]
fn test_check_empty_allow_list() {
    let out = run(kemba().args(["check", "svc:db"]));
    assert!(out.status.success());

    let stdout = lines(&out.stdout);
    assert_eq!(stdout[0], "allow-list is empty, every tag is disabled");
    assert!(stdout[1].starts_with("svc:db\tdisabled\t"));
}

#[test]
fn test_check_piped_output_has_no_escapes() {
    let out = run(kemba().env("DEBUG", "svc:*").args(["check", "svc:db"]));
    assert!(!String::from_utf8_lossy(&out.stdout).contains('\x1b'));
}

#[test]
fn test_check_warns_on_broken_pattern() {
    let out = run(kemba().env("DEBUG", "svc(*").args(["check", "svc(db"]));
    assert!(out.status.success());
    assert!(lines(&out.stdout)[1].starts_with("svc(db\tdisabled\t"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not compile"));
}

#[test]
fn test_config_file_replaces_environment() {
    let file = config_file("allowed = \"cfg:*\"\n");
    let out = run(
        kemba()
            .env("DEBUG", "svc:*")
            .arg("--config")
            .arg(file.path())
            .args(["check", "cfg:x", "svc:db"]),
    );
    assert!(out.status.success());

    let stdout = lines(&out.stdout);
    assert_eq!(stdout[0], "allow-list: cfg:*");
    assert!(stdout[1].starts_with("cfg:x\tenabled\t"));
    assert!(stdout[2].starts_with("svc:db\tdisabled\t"));
}

#[test]
fn test_missing_config_file_fails() {
    let out = run(kemba().args(["--config", "/definitely/not/here.toml", "check", "x"]));
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_pipe_one_emission_per_line() {
    let out = run_with_stdin(
        kemba().env("DEBUG", "svc:*").env("NOCOLOR", "1").args(["pipe", "svc:db"]),
        "a\nb\n",
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = lines(&out.stderr);
    assert_eq!(stderr.len(), 2);
    assert_matches(r"^svc:db a \+\d+ms$", &stderr[0]);
    assert_matches(r"^svc:db b \+\d+ms$", &stderr[1]);
}

#[test]
fn test_pipe_no_color_flag() {
    let out = run_with_stdin(
        kemba().env("DEBUG", "svc:*").args(["--no-color", "pipe", "svc:db"]),
        "ready\n",
    );
    let stderr = lines(&out.stderr);
    assert_eq!(stderr.len(), 1);
    assert_matches(r"^svc:db ready \+\d+ms$", &stderr[0]);
}

#[test]
fn test_pipe_colored_by_default() {
    let out = run_with_stdin(kemba().env("DEBUG", "svc:*").args(["pipe", "svc:db"]), "ready\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("\x1b[38;5;203msvc:db"));
    assert!(stderr.contains("\x1b[38;5;240m+"));
}

#[test]
fn test_pipe_config_no_color() {
    let file = config_file("allowed = \"svc:db\"\nno_color = true\n");
    let out = run_with_stdin(
        kemba().arg("--config").arg(file.path()).args(["pipe", "svc:db"]),
        "ready\n",
    );
    assert_matches(r"^svc:db ready \+\d+ms$", &lines(&out.stderr)[0]);
}

#[test]
fn test_pipe_disabled_is_silent() {
    let out = run_with_stdin(kemba().env("DEBUG", "other:*").args(["pipe", "svc:db"]), "a\nb\n");
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_palette_lists_every_entry() {
    let out = run(kemba().arg("palette"));
    assert!(out.status.success());

    let stdout = lines(&out.stdout);
    assert_eq!(stdout.len(), 76);
    assert_eq!(stdout[0], "#00  20");
    assert_eq!(stdout[75], "#75 221");
    for line in &stdout {
        assert_matches(r"^#\d{2} +\d{1,3}$", line);
    }
}
