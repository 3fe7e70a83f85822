use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

/// After a merge, `log` shows the merge commit with its `Merge:` line and
/// then walks first parents only, so the merged-in branch's commit does not
/// appear.
#[rstest]
fn log_follows_first_parent_only(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "side"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("side.txt"),
        "side change\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "side.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "side commit"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("main.txt"),
        "master change\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "main.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "master commit"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["merge", "side"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"(?s)^===\ncommit [0-9a-f]{40}\nMerge: [0-9a-f]{7} [0-9a-f]{7}\nDate: .+ -0800\nMerged side into master\.\n\n===\ncommit [0-9a-f]{40}\nDate: .+\nmaster commit\n",
        )?)
        .stdout(predicate::str::contains("side commit").not());

    Ok(())
}
