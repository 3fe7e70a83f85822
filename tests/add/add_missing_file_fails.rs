use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_missing_file_fails(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["init"]).assert().success();

    run_gitlet_command(dir.path(), &["add", "nothing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist."));
}
