use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn blockmark() -> Command {
    Command::new(env!("CARGO_BIN_EXE_blockmark"))
}

#[test]
fn writes_derived_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "# Title\n\nSome *text*.\n").unwrap();

    let status = blockmark().arg(&input).output().unwrap();
    assert!(status.status.success());

    let output = dir.path().join("post.gutenberg.html");
    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        html,
        "<!-- wp:heading -->\n<h1>Title</h1>\n<!-- /wp:heading -->\n\
         <!-- wp:paragraph -->\n<p>Some <em>text</em>.</p>\n<!-- /wp:paragraph -->\n"
    );

    let stdout = String::from_utf8(status.stdout).unwrap();
    assert!(stdout.contains("post.gutenberg.html"));
}

#[test]
fn writes_explicit_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("list.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "- a\n- b").unwrap();

    let status = blockmark().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<!-- wp:list -->\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<!-- /wp:list -->\n"
    );
    assert!(!dir.path().join("list.gutenberg.html").exists());
}

#[test]
fn missing_input_argument_fails_without_output() {
    let dir = tempdir().unwrap();
    let result = blockmark().current_dir(dir.path()).output().unwrap();
    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(2));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unreadable_input_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.md");
    let result = blockmark().arg(&input).output().unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("failed to read"));
    assert!(!dir.path().join("absent.gutenberg.html").exists());
}

#[test]
fn inline_warnings_are_reported_on_stderr() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("draft.md");
    fs::write(&input, "an *open span\n").unwrap();

    let result = blockmark().arg(&input).env_remove("RUST_LOG").output().unwrap();
    assert!(result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("1:4: unclosed emphasis span"));
    assert!(!stderr.contains("inline warnings"));
}
