use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_unmodified_file_is_a_no_op(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // wug.txt is committed and unchanged; adding it stages nothing
    run_gitlet_command(dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n",
        ));

    run_gitlet_command(dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));
}
