use crate::common::command::{repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::{commit_exists, read_branch_oid};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fetch_creates_tracking_branch(repository_dir: TempDir) {
    let local = repository_dir;
    let remote = TempDir::new().expect("Failed to create remote dir");

    run_gitlet_command(local.path(), &["init"]).assert().success();
    run_gitlet_command(remote.path(), &["init"]).assert().success();

    write_file(FileSpec::new(
        remote.path().join("theirs.txt"),
        "remote content\n".to_string(),
    ));
    run_gitlet_command(remote.path(), &["add", "theirs.txt"])
        .assert()
        .success();
    run_gitlet_command(remote.path(), &["commit", "remote commit"])
        .assert()
        .success();

    let remote_path = remote.path().to_string_lossy().to_string();
    run_gitlet_command(local.path(), &["add-remote", "r1", &remote_path])
        .assert()
        .success();

    run_gitlet_command(local.path(), &["fetch", "r1", "master"])
        .assert()
        .success();

    // the tracking branch mirrors the remote head, and its commit is local now
    let remote_head = read_branch_oid(remote.path(), "master");
    assert_eq!(read_branch_oid(local.path(), "r1/master"), remote_head);
    assert!(commit_exists(local.path(), &remote_head));

    // the tracking branch shows up in status
    run_gitlet_command(local.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r1/master"));

    // fetching a branch the remote lacks is refused
    run_gitlet_command(local.path(), &["fetch", "r1", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A branch with that name does not exist."));
}
