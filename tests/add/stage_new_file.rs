use crate::common::command::{repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn stage_new_file(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["init"]).assert().success();

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "This is a wug.\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nwug.txt\n"));

    // the blob is already in the store before the commit
    let blobs = std::fs::read_dir(dir.path().join(".gitlet").join("blobs"))
        .unwrap()
        .count();
    assert_eq!(blobs, 1);
}
