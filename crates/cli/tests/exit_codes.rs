//! Exit codes of the `skillpack` binary for both modes.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    path::Path,
    process::{Command, Output},
};

fn skillpack(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillpack"))
        .args(args)
        .arg("--root")
        .arg(root)
        .env_remove("SKILLPACK_ROOT")
        .env_remove("RUST_LOG")
        .current_dir(root)
        .output()
        .unwrap()
}

fn write_skill(root: &Path, name: &str, version: &str) {
    let dir = root.join("skills").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {name}\nversion: {version}\n---\n"),
    )
    .unwrap();
}

#[test]
fn generate_then_validate_exit_zero() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "commit", "1.0.0");
    write_skill(tmp.path(), "review", "0.2.0");

    let out = skillpack(tmp.path(), &["generate"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Found 2 skill(s): commit, review"), "{stdout}");

    let out = skillpack(tmp.path(), &["validate"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn stale_manifest_exits_one_with_both_dumps() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "commit", "1.0.0");
    assert_eq!(skillpack(tmp.path(), &["generate"]).status.code(), Some(0));

    write_skill(tmp.path(), "commit", "2.0.0");
    let out = skillpack(tmp.path(), &["validate"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    let expected_at = stderr.find("Expected:").unwrap();
    let actual_at = stderr.find("Actual:").unwrap();
    assert!(expected_at < actual_at);
    assert!(stderr[expected_at..actual_at].contains("2.0.0"));
    assert!(stderr[actual_at..].contains("1.0.0"));
}

#[test]
fn unreadable_manifest_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "commit", "1.0.0");

    assert_eq!(skillpack(tmp.path(), &["validate"]).status.code(), Some(1));

    std::fs::write(tmp.path().join("manifest.json"), [0xff, 0xfe, b'{', b'}']).unwrap();
    let out = skillpack(tmp.path(), &["validate"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to parse manifest"), "{stderr}");
}

#[test]
fn unknown_mode_is_a_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out = skillpack(tmp.path(), &["publish"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn broken_skill_fails_generate_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("skills/broken");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), "no frontmatter\n").unwrap();

    let out = skillpack(tmp.path(), &["generate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!tmp.path().join("manifest.json").exists());
}
