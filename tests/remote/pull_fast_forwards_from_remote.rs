use crate::common::command::{repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::read_branch_oid;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Pulling from a remote that moved ahead fetches its objects and
/// fast-forwards the current branch onto the tracking head.
#[rstest]
fn pull_fast_forwards_from_remote(repository_dir: TempDir) {
    let local = repository_dir;
    let remote = TempDir::new().expect("Failed to create remote dir");

    run_gitlet_command(local.path(), &["init"]).assert().success();
    run_gitlet_command(remote.path(), &["init"]).assert().success();

    write_file(FileSpec::new(
        remote.path().join("shared.txt"),
        "from the remote\n".to_string(),
    ));
    run_gitlet_command(remote.path(), &["add", "shared.txt"])
        .assert()
        .success();
    run_gitlet_command(remote.path(), &["commit", "remote commit"])
        .assert()
        .success();

    let remote_path = remote.path().to_string_lossy().to_string();
    run_gitlet_command(local.path(), &["add-remote", "r1", &remote_path])
        .assert()
        .success();

    run_gitlet_command(local.path(), &["pull", "r1", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current branch fast-forwarded."));

    assert_eq!(
        read_file(&local.path().join("shared.txt")),
        "from the remote\n"
    );

    // HEAD now sits on the tracking branch after the fast-forward checkout
    let remote_head = read_branch_oid(remote.path(), "master");
    assert_eq!(read_branch_oid(local.path(), "r1/master"), remote_head);
}
