//! Commit history traversal
//!
//! - `commit_graph`: the commit DAG reachable from the branch tips, together
//!   with a topological order in which every commit precedes its parents
//!
//! ## Algorithm
//!
//! A single memoized depth-first walk over parent links, driven by an explicit
//! stack so that history depth never grows the call stack. Commits are emitted
//! in post-order (parents first) and the sequence is reversed at the end.

pub mod commit_graph;
