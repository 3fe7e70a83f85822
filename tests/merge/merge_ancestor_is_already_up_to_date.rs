use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Merging a branch whose head is an ancestor of the current head changes
/// nothing.
#[rstest]
fn merge_ancestor_is_already_up_to_date(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "behind"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("ahead.txt"),
        "master moved on\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "ahead.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "master ahead"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["merge", "behind"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Given branch is an ancestor of the current branch.",
        ));
}
