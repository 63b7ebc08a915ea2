use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn converts_inputs_in_order_to_stdout() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.tex");
    let second = dir.path().join("b.tex");
    fs::write(&first, "\\rSec0[a]{A}\n\\pnum One\n").unwrap();
    fs::write(&second, "\\pnum Two \\tcode{x}\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg(first.as_os_str()).arg(second.as_os_str());

    cmd.assert()
        .success()
        .stdout("@node\n@chapter A\n@anchor{a}\n1. One\n1. Two @code{x}\n");
}

#[test]
fn resolves_includes_against_include_dir() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("intro.tex"), "\\pnum Intro").unwrap();
    fs::write(source.join("xrefs.tex"), "\\never").unwrap();
    let main = dir.path().join("std.tex");
    fs::write(&main, "\\include{intro}\n\\include{xrefs}").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("-I").arg(source.as_os_str()).arg(main.as_os_str());

    cmd.assert()
        .success()
        .stdout("1. Intro\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.tex");
    let output = dir.path().join("out.texi");
    fs::write(&input, "\\documentclass{book}\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg(input.as_os_str())
        .arg("-o")
        .arg(output.as_os_str());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "\\input texinfo  @c -*-texinfo-*-\n"
    );
}

#[test]
fn reports_unknown_command_once() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("w.tex");
    fs::write(&input, "\\odd x\n\\odd y\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("--no-color").arg(input.as_os_str());

    let output = cmd.assert().success().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert_eq!(stderr.matches("unrecognized command '\\odd'").count(), 1);
    assert!(stderr.contains("w.tex:1:"));
}

#[test]
fn strict_mode_fails_on_diagnostics() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("w.tex");
    fs::write(&input, "\\odd\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("--strict").arg("--quiet").arg(input.as_os_str());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn missing_input_is_skipped() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("ok.tex");
    fs::write(&present, "fine").unwrap();
    let absent = dir.path().join("absent.tex");

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("--no-color")
        .arg(absent.as_os_str())
        .arg(present.as_os_str());

    cmd.assert()
        .failure()
        .stdout("fine")
        .stderr(predicate::str::contains("cannot open input"));
}

#[test]
fn malformed_delimiters_abort_the_run() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.tex");
    let later = dir.path().join("later.tex");
    fs::write(&bad, "ok\n\\tcode{never closed").unwrap();
    fs::write(&later, "after").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("--no-color")
        .arg(bad.as_os_str())
        .arg(later.as_os_str());

    cmd.assert()
        .failure()
        .stdout("ok\n")
        .stderr(predicate::str::contains("malformed delimiters"))
        .stderr(predicate::str::contains("bad.tex:2:"));
}

#[test]
fn dumps_tokens() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("t.tex");
    fs::write(&input, "\\tcode{x}~").unwrap();

    let mut cmd = cargo_bin_cmd!("texi");
    cmd.arg("--tokens").arg(input.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("DIRECTIVE tcode"));
    assert_eq!(lines[1], "UNBREAKABLE_SPACE");
    assert_eq!(lines[2], "EOF");
}

#[test]
fn requires_an_input() {
    let mut cmd = cargo_bin_cmd!("texi");
    cmd.assert().failure();
}
