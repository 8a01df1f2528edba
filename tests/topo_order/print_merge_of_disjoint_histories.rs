use crate::common::command::{repository, run_topo_command};
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
/// ```
///   A1      B1
///   |       |
///   A2      B2
///     \    /
///       M   (main)
/// ```
///
/// M is printed first, followed by the line of its last parent. Moving from
/// B1 (a root) over to A2 is a jump, bracketed by `=` (B1 has no parents),
/// an empty line, and `=M` (A2's only child).
#[rstest]
fn print_merge_of_disjoint_histories(
    repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let a1 = repository.commit(&[], "A1");
    let a2 = repository.commit(&[&a1], "A2");
    let b1 = repository.commit(&[], "B1");
    let b2 = repository.commit(&[&b1], "B2");
    let merge = repository.commit(&[&a2, &b2], "M");
    repository.branch("main", &merge);

    let output = run_topo_command(repository.path()).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = [
        format!("{merge} main"),
        b2.clone(),
        b1.clone(),
        "=".to_string(),
        String::new(),
        format!("={merge}"),
        a2.clone(),
        a1.clone(),
    ];
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);

    Ok(())
}
