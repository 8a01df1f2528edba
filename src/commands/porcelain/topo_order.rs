use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_map::BranchMap;
use crate::artifacts::log::commit_graph::{CommitGraph, CommitNode};
use std::io::Write;

impl Repository {
    /// Print every commit reachable from a local branch, children before parents
    ///
    /// Nothing is written unless the whole graph could be read.
    pub fn topo_order(&self) -> anyhow::Result<()> {
        let branches = self.refs().branch_map()?;
        if branches.is_empty() {
            anyhow::bail!("no branches to traverse in {}", self.path().display());
        }

        let graph = CommitGraph::build(branches.tips(), |oid| {
            self.database().load_commit_parents(oid)
        })?;

        let mut writer = self.writer();
        write_topo_order(&mut *writer, &graph, &branches)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write one line per commit, bracketing every jump between unrelated lines
///
/// When the next commit is not a parent of the current one, the current
/// commit's parents are written as `<parents>=` followed by an empty line, and
/// the next commit is preceded by `=<children>`.
pub fn write_topo_order(
    writer: &mut impl Write,
    graph: &CommitGraph,
    branches: &BranchMap,
) -> std::io::Result<()> {
    let mut nodes = graph.iter().peekable();
    let mut sticky_start = false;

    while let Some(node) = nodes.next() {
        if sticky_start {
            writeln!(writer, "={}", join_ids(node.children()))?;
            sticky_start = false;
        }

        write_commit_line(writer, node, branches)?;

        if let Some(next) = nodes.peek()
            && !node.has_parent(next.oid())
        {
            writeln!(writer, "{}=", join_ids(node.parents().iter()))?;
            writeln!(writer)?;
            sticky_start = true;
        }
    }

    Ok(())
}

fn write_commit_line(
    writer: &mut impl Write,
    node: &CommitNode,
    branches: &BranchMap,
) -> std::io::Result<()> {
    let names = branches.names(node.oid());
    if names.is_empty() {
        writeln!(writer, "{}", node.oid())
    } else {
        writeln!(writer, "{} {}", node.oid(), join_ids(names.iter()))
    }
}

fn join_ids<T: AsRef<str>>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
