use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_and_rm_remote_records(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["init"]).assert().success();

    run_gitlet_command(dir.path(), &["add-remote", "origin", "/tmp/elsewhere"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["add-remote", "origin", "/tmp/elsewhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A remote with that name already exists."));

    run_gitlet_command(dir.path(), &["rm-remote", "origin"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm-remote", "origin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A remote with that name does not exist."));

    // a recorded remote whose directory is gone is unreachable
    run_gitlet_command(dir.path(), &["add-remote", "ghost", "/tmp/does/not/exist"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["push", "ghost", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote directory not found."));
    run_gitlet_command(dir.path(), &["fetch", "ghost", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote directory not found."));
}
