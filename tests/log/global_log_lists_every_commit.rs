use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("notwug.txt"),
        "This is not a wug.\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "notwug.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "added notwug"])
        .assert()
        .success();

    // initial commit + two snapshots, in no particular order
    let output = run_gitlet_command(dir.path(), &["global-log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("global-log output is UTF-8");

    assert_eq!(output.matches("===\ncommit ").count(), 3);
    assert!(output.contains("initial commit"));
    assert!(output.contains("added wug"));
    assert!(output.contains("added notwug"));
}
