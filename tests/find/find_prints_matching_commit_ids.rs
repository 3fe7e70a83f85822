use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_prints_matching_commit_ids(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    // two commits sharing one message
    write_file(FileSpec::new(dir.path().join("a.txt"), "a\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"]).assert().success();
    run_gitlet_command(dir.path(), &["commit", "same message"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("b.txt"), "b\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "b.txt"]).assert().success();
    run_gitlet_command(dir.path(), &["commit", "same message"])
        .assert()
        .success();

    let output = run_gitlet_command(dir.path(), &["find", "same message"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let ids = output.lines().collect::<Vec<_>>();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    for id in ids {
        assert_eq!(id.len(), 40);
    }

    run_gitlet_command(dir.path(), &["find", "no such message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no commit with that message."));

    Ok(())
}
