use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reinitialize_fails(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["init"]).assert().success();

    // refusals exit 0 with the canonical message on stdout
    run_gitlet_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A Gitlet version-control system already exists in the current directory.",
        ));
}
