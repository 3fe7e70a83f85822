use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::read_branch_oid;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_file_from_commit_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let first_oid = read_branch_oid(dir.path(), "master");

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "second version\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "wug.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "second"])
        .assert()
        .success();

    // abbreviated commit id restores the older version
    run_gitlet_command(dir.path(), &["checkout", &first_oid[..8], "--", "wug.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("wug.txt")), "This is a wug.\n");

    run_gitlet_command(dir.path(), &["checkout", "0000000000", "--", "wug.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit with that id exists."));

    run_gitlet_command(dir.path(), &["checkout", &first_oid, "--", "absent.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist in that commit."));
}
