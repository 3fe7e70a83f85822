use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::read_branch_oid;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_moves_branch_and_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let first_oid = read_branch_oid(dir.path(), "master");

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "second version\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("later.txt"),
        "added later\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "wug.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["add", "later.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "second"])
        .assert()
        .success();

    // reset by abbreviated id
    run_gitlet_command(dir.path(), &["reset", &first_oid[..10]])
        .assert()
        .success();

    assert_eq!(read_branch_oid(dir.path(), "master"), first_oid);
    assert_eq!(read_file(&dir.path().join("wug.txt")), "This is a wug.\n");
    assert!(!dir.path().join("later.txt").exists());

    // staging is cleared by the reset
    run_gitlet_command(dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));

    run_gitlet_command(dir.path(), &["reset", "deadbeef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit with that id exists."));
}
