use crate::common::command::{repository, run_topo_command};
use crate::common::commit_lines;
use crate::common::repository::TestRepository;
use rstest::rstest;
use std::collections::HashMap;

/// History:
/// ```
///        A
///      /   \
///     B     C (topic)
///     |     |
///     D     E
///      \   / \
///        M    F (release)
///     (main)
/// ```
#[rstest]
fn history_with_shared_ancestor_prints_every_commit_once(repository: TestRepository) {
    let a = repository.commit(&[], "A");
    let b = repository.commit(&[&a], "B");
    let c = repository.commit(&[&a], "C");
    let d = repository.commit(&[&b], "D");
    let e = repository.commit(&[&c], "E");
    let m = repository.commit(&[&d, &e], "M");
    let f = repository.commit(&[&e], "F");
    repository.branch("main", &m);
    repository.branch("topic", &c);
    repository.branch("release", &f);

    let output = run_topo_command(repository.path()).assert().success();
    let lines = commit_lines(&output.get_output().stdout);

    let ids = lines
        .iter()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    let position = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect::<HashMap<_, _>>();

    assert_eq!(ids.len(), 7);
    assert_eq!(position.len(), 7, "every commit is printed exactly once");

    let edges = [(&b, &a), (&c, &a), (&d, &b), (&e, &c), (&m, &d), (&m, &e), (&f, &e)];
    for (child, parent) in edges {
        assert!(
            position[child] < position[parent],
            "{child} must be printed before its parent {parent}"
        );
    }

    assert!(lines.contains(&format!("{m} main")));
    assert!(lines.contains(&format!("{c} topic")));
    assert!(lines.contains(&format!("{f} release")));
    assert!(lines.contains(&a));
}
