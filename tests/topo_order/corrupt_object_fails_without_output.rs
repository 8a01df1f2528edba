use crate::common::command::{repository, run_topo_command};
use crate::common::repository::TestRepository;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn corrupt_object_fails_without_output(repository: TestRepository) {
    let root = repository.commit(&[], "root");
    let tip = repository.commit(&[&root], "tip");
    repository.branch("main", &tip);
    repository.write_raw_object(&root, b"this is not zlib data");

    run_topo_command(repository.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("Corrupt object {root}")));
}

#[rstest]
fn non_commit_tip_fails(repository: TestRepository) {
    let blob = repository.write_object("blob", b"hello\n");
    repository.branch("main", &blob);

    run_topo_command(repository.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected a commit, found a blob"));
}
