use crate::common::command::{repository, run_topo_command};
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
/// ```
///   A   B   C
///    \  |  /
///       M   (main)
/// ```
///
/// Every jump between the unrelated roots gets its own bracket: `=` for the
/// root just left, an empty line, and `=M` for the root resumed.
#[rstest]
fn print_octopus_merge_of_disjoint_roots(
    repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = repository.commit(&[], "A");
    let b = repository.commit(&[], "B");
    let c = repository.commit(&[], "C");
    let merge = repository.commit(&[&a, &b, &c], "M");
    repository.branch("main", &merge);

    let output = run_topo_command(repository.path()).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = [
        format!("{merge} main"),
        c.clone(),
        "=".to_string(),
        String::new(),
        format!("={merge}"),
        b.clone(),
        "=".to_string(),
        String::new(),
        format!("={merge}"),
        a.clone(),
    ];
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);

    Ok(())
}
