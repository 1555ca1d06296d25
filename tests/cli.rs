use std::fs;

use assert_cmd::Command;

fn script_path(name: &str, source: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("rocks-cli-test-{name}.lox"));
    fs::write(&path, source).expect("could not write temp script");
    path
}

#[test]
fn successful_run_exits_zero() {
    let path = script_path("ok", "print 1 + 1;");

    Command::cargo_bin("rocks").unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn a_parse_error_exits_65() {
    let path = script_path("parse-error", "var = ;");

    Command::cargo_bin("rocks").unwrap()
        .arg(&path)
        .assert()
        .code(65);
}

#[test]
fn a_runtime_error_exits_70() {
    let path = script_path("runtime-error", "print 1 + nil;");

    Command::cargo_bin("rocks").unwrap()
        .arg(&path)
        .assert()
        .code(70);
}

#[test]
fn too_many_arguments_exits_64() {
    Command::cargo_bin("rocks").unwrap()
        .arg("a.lox")
        .arg("b.lox")
        .assert()
        .code(64);
}
