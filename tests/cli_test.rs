use assert_cmd::Command;
use predicates::prelude::*;

fn prdraft() -> Command {
    let mut cmd = Command::cargo_bin("prdraft").unwrap();
    cmd.env_remove("PRDRAFT_MODEL").env_remove("PRDRAFT_OUTPUT_DIR");
    cmd
}

#[test]
fn test_help_mentions_commit_count() {
    prdraft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of commits to summarize"));
}

#[test]
fn test_rejects_zero_commits() {
    prdraft()
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_rejects_non_numeric_commits() {
    prdraft()
        .arg("varios")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_outside_git_repository_fails_before_generating() {
    let dir = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    prdraft()
        .current_dir(dir.path())
        .arg("--no-clipboard")
        .arg("--output-dir")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"))
        .stdout(predicate::str::contains("Procesando").not());

    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_model_is_rejected_before_generating() {
    let dir = tempfile::tempdir().unwrap();

    prdraft()
        .current_dir(dir.path())
        .args(["--no-clipboard", "--model", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("model name is empty"))
        .stdout(predicate::str::contains("Procesando").not());
}
