use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_branch_is_refused(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No such branch exists."));
}

#[rstest]
fn current_branch_is_refused(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No need to checkout the current branch."));
}

#[rstest]
fn untracked_file_blocks_the_switch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("untracked.txt"),
        "in the way\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    // nothing moved: still on master, file untouched
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master"));
    assert!(dir.path().join("untracked.txt").exists());
}

/// An unstaged edit to a tracked file does not trip the untracked check
#[rstest]
fn modified_tracked_file_does_not_block_the_switch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "modified without staging\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // deleting the now-former branch from `other` works
    run_gitlet_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .success();
}
