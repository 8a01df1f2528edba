use crate::common::command::{repository, run_topo_command};
use crate::common::repository::TestRepository;
use rstest::rstest;

/// C3 -> C2 -> C1: every printed pair is a direct edge, so no markers
#[rstest]
fn print_linear_chain(repository: TestRepository) {
    let c1 = repository.commit(&[], "C1");
    let c2 = repository.commit(&[&c1], "C2");
    let c3 = repository.commit(&[&c2], "C3");
    repository.branch("main", &c3);

    run_topo_command(repository.path())
        .assert()
        .success()
        .stdout(format!("{c3} main\n{c2}\n{c1}\n"));
}
