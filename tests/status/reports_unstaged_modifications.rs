use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn modified_tracked_file_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "edited without staging\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nwug.txt (modified)\n",
        ));
}

#[rstest]
fn deleted_tracked_file_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    std::fs::remove_file(dir.path().join("wug.txt")).expect("Failed to delete wug.txt");

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nwug.txt (deleted)\n",
        ));
}

#[rstest]
fn staged_file_changed_after_staging_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("fresh.txt"),
        "first version\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "fresh.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("fresh.txt"),
        "second version\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nfresh.txt (modified)\n",
        ));
}
