use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_switches_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();

    // advance master past the fork
    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "master version\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("extra.txt"),
        "only on master\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "wug.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["add", "extra.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "master changes"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["checkout", "other"])
        .assert()
        .success();

    // the tree now matches the fork point: old contents, no extra file
    assert_eq!(read_file(&dir.path().join("wug.txt")), "This is a wug.\n");
    assert!(!dir.path().join("extra.txt").exists());

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Branches ===\nmaster\n*other\n"));
}
