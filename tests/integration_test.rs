// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn gitversion(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gitversion"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute gitversion")
}

/// A scratch directory holding an empty config file, so no user config leaks in
fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gitversion.toml"), "").unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_gitversion_help() {
    let dir = workspace();
    let output = gitversion(dir.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("gitversion"));
    assert!(text.contains("Generate PEP 440 version numbers"));
    assert!(text.contains("--version-file"));
}

#[test]
fn test_gitversion_version() {
    let dir = workspace();
    let output = gitversion(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("gitversion {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_dry_run_prints_release_version() {
    let dir = workspace();
    let output = gitversion(
        dir.path(),
        &["--dry-run", "--base-version", "1.2.3", "-V", "LOCAL-VERSION"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.3\n");
    assert!(!dir.path().join("LOCAL-VERSION").exists());
}

#[test]
fn test_dry_run_with_always_policy() {
    let dir = workspace();
    let output = gitversion(
        dir.path(),
        &["-n", "--base-version", "v1.2.3rc1", "--policy", "always"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.post0.dev0\n");
}

#[test]
fn test_dry_run_reads_manifest() {
    let dir = workspace();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"4.5.6\"\n",
    )
    .unwrap();

    let output = gitversion(dir.path(), &["--dry-run"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4.5.6\n");
}

#[test]
fn test_missing_manifest_fails() {
    let dir = workspace();
    let output = gitversion(dir.path(), &["--dry-run"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("Cargo.toml"));
}

#[test]
fn test_invalid_policy_is_rejected() {
    let dir = workspace();
    let output = gitversion(dir.path(), &["--policy", "sometimes"]);

    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Real git history
// ============================================================================

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Build Bot",
            "-c",
            "user.email=build@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn commit(dir: &Path, message: &str) {
    git(dir, &["commit", "-q", "--allow-empty", "-m", message]);
}

#[test]
fn test_version_from_real_history() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let dir = workspace();
    let repo = dir.path();
    git(repo, &["init", "-q"]);
    commit(repo, "initial");
    git(repo, &["tag", "1.2.3"]);
    commit(repo, "after release");
    git(repo, &["checkout", "-q", "-b", "feature"]);
    commit(repo, "feature work");
    git(repo, &["checkout", "-q", "-"]);
    git(repo, &["merge", "-q", "--no-ff", "--no-edit", "-m", "merge feature", "feature"]);
    commit(repo, "first after merge");
    commit(repo, "second after merge");

    let output = gitversion(repo, &["--base-version", "1.2.3", "-V", "LOCAL-VERSION"]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "1.2.3.post1.dev2\n");
    assert_eq!(
        fs::read_to_string(repo.join("LOCAL-VERSION")).unwrap(),
        ".post1.dev2\n"
    );

    let again = gitversion(repo, &["--base-version", "1.2.3"]);
    assert_eq!(stdout(&again), "1.2.3.post1.dev2\n");
}

#[test]
fn test_unknown_release_tag_fails() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let dir = workspace();
    let repo = dir.path();
    git(repo, &["init", "-q"]);
    commit(repo, "initial");

    let output = gitversion(repo, &["--base-version", "9.9.9"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("git rev-list --merges 9.9.9...HEAD"));
}
