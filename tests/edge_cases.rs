//! Edge case tests for treemd


use assert_cmd::Command;
use harness::{TestDir, run_treemd};
use predicates::prelude::*;

fn treemd_in(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("treemd").expect("binary builds");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_empty_directory_renders_nothing() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_treemd(dir.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "", "empty input yields empty markdown");
}

#[test]
fn test_empty_manifest_renders_nothing() {
    let dir = TestDir::new();
    dir.add_file("empty.json", "[]");

    let (stdout, _stderr, success) = run_treemd(dir.path(), &["--from-list", "empty.json"]);
    assert!(success);
    assert_eq!(stdout, "");
}

#[test]
fn test_missing_directory_fails() {
    let dir = TestDir::new();
    treemd_in(&dir)
        .arg("no/such/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access"));
}

#[test]
fn test_invalid_manifest_fails() {
    let dir = TestDir::new();
    dir.add_file("broken.json", "{ not a list");

    treemd_in(&dir)
        .args(["--from-list", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid manifest"));
}

#[test]
fn test_invalid_json_document_fails() {
    let dir = TestDir::new();
    dir.add_file("bad.json", "{ \"unterminated\": ");

    treemd_in(&dir)
        .arg("bad.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_invalid_yaml_document_fails() {
    let dir = TestDir::new();
    dir.add_file("bad.yaml", "key: [unclosed");

    treemd_in(&dir)
        .arg("bad.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid YAML"));
}

#[test]
fn test_unrecognized_file_argument_fails() {
    let dir = TestDir::new();
    dir.add_file("notes.txt", "plain text");

    treemd_in(&dir)
        .arg("notes.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither a directory"));
}

#[test]
fn test_bare_primitive_document_has_no_header() {
    let dir = TestDir::new();
    dir.add_file("answer.json", "42");

    let (stdout, _stderr, success) = run_treemd(dir.path(), &["answer.json"]);
    assert!(success);
    assert_eq!(stdout, "42\n");
}

#[test]
fn test_single_segment_paths_use_fallback_root_name() {
    let dir = TestDir::new();
    dir.add_file("flat.json", r#"[{"path":"x.txt","size":1}]"#);

    let (_stdout, _stderr, success) =
        run_treemd(dir.path(), &["--from-list", "flat.json", "-o"]);
    assert!(success);
    assert!(
        dir.path().join("directory_tree.md").exists(),
        "fallback root name feeds the default export name"
    );
}

#[test]
fn test_ambiguous_path_kinds_do_not_crash() {
    // "x" appears as both a file and a folder prefix; the tool must
    // resolve it silently instead of failing.
    let dir = TestDir::new();
    dir.add_file(
        "conflict.json",
        r#"[{"path":"a/x","size":5},{"path":"a/x/deep.txt","size":7}]"#,
    );

    let (stdout, _stderr, success) = run_treemd(dir.path(), &["--from-list", "conflict.json"]);
    assert!(success);
    assert!(stdout.contains("deep.txt"), "folder entry wins: {}", stdout);
}

#[test]
fn test_json_flag_conflicts_with_output() {
    let dir = TestDir::new();
    dir.add_file("m.json", "[]");

    treemd_in(&dir)
        .args(["--from-list", "m.json", "--json", "-o", "out.md"])
        .assert()
        .failure();
}
