use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn codebundle() -> Command {
    Command::cargo_bin("codebundle").expect("binary exists")
}

#[test]
fn help_displays_usage() {
    codebundle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("create-rsp"));
}

#[test]
fn bundles_matching_files() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("a.py"), "x=1").unwrap();
    fs::write(root.join("b.js"), "let y=2;\n\n").unwrap();
    fs::write(root.join("c.rb"), "puts 1").unwrap();

    codebundle()
        .args(["bundle", "-l", "py", "js", "-o", "out.txt", "-r", "--root"])
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle created"));

    let written = fs::read_to_string(root.join("out.txt")).unwrap();
    assert_eq!(written, "x=1\n\nlet y=2;\n\n");
}

#[test]
fn remove_empty_lines_drops_whitespace_only_lines() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("app.ts"), "let a = 1;\n  \t\n   \r\nlet b = 2;\n").unwrap();

    codebundle()
        .args(["bundle", "-l", "ts", "-o", "out.txt", "--remove-empty-lines", "--root"])
        .arg(root)
        .assert()
        .success();

    let written = fs::read_to_string(root.join("out.txt")).unwrap();
    assert_eq!(written, "let a = 1;\nlet b = 2;\n\n");
}

#[test]
fn notes_and_author_are_written() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("lib/Main.java"), "class Main {}\n").unwrap();
    fs::write(root.join("Program.cs"), "class Program {}\n").unwrap();

    codebundle()
        .args([
            "bundle", "--language", "all", "--output", "bundle.txt", "--note", "--sort", "type",
            "--author", "Alice", "--root",
        ])
        .arg(root)
        .assert()
        .success();

    let written = fs::read_to_string(root.join("bundle.txt")).unwrap();
    assert_eq!(
        written,
        "// Author: Alice\n\
         // Source: Program.cs\nclass Program {}\n\n\
         // Source: lib/Main.java\nclass Main {}\n\n"
    );
}

#[test]
fn unknown_languages_abort_without_output() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("a.rb"), "puts 1").unwrap();

    codebundle()
        .args(["bundle", "-l", "ruby", "-o", "out.txt", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("No valid languages specified."));

    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn reports_when_no_files_match() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("notes.md"), "# notes").unwrap();

    codebundle()
        .args(["bundle", "-l", "java", "-o", "out.txt", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("No matching files found"));

    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn missing_output_is_a_usage_error() {
    codebundle()
        .args(["bundle", "-l", "py"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn create_rsp_writes_response_file() {
    let temp = tempfile::tempdir().unwrap();

    codebundle()
        .args(["create-rsp", "--root"])
        .arg(temp.path())
        .write_stdin("all\nout.txt\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle.rsp"));

    let written = fs::read_to_string(temp.path().join("bundle.rsp")).unwrap();
    assert_eq!(written, "bundle --language all --output \"out.txt\"");
}

#[test]
fn prints_completions() {
    codebundle()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codebundle"));
}
