use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_file_restores_head_version(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("wug.txt"),
        "scribbled over\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "--", "wug.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("wug.txt")), "This is a wug.\n");
}
