use crate::common::command::{repository, run_topo_command};
use crate::common::repository::TestRepository;
use rstest::rstest;

#[rstest]
fn nested_branch_names_are_printed_in_full(repository: TestRepository) {
    let root = repository.commit(&[], "root");
    let tip = repository.commit(&[&root], "tip");
    repository.branch("main", &root);
    repository.branch("feature/ui/login", &tip);
    repository.branch("feature/api", &tip);

    run_topo_command(repository.path())
        .assert()
        .success()
        .stdout(format!("{tip} feature/api feature/ui/login\n{root} main\n"));
}
