use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bitflags::bitflags;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// No loose object exists for this commit, its parents are unknown
        const UNRESOLVED = 0b01;
        /// The commit is the tip of at least one branch
        const BRANCH_TIP = 0b10;
    }
}

/// A commit in the graph, linked to its neighbours by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNode {
    oid: ObjectId,
    /// Parent ids in object order, without duplicates
    parents: Vec<ObjectId>,
    /// Ids of every discovered commit naming this one as a parent
    children: BTreeSet<ObjectId>,
    flags: NodeFlags,
}

impl CommitNode {
    fn new(oid: ObjectId, parents: Option<Vec<ObjectId>>) -> Self {
        let flags = if parents.is_some() {
            NodeFlags::empty()
        } else {
            NodeFlags::UNRESOLVED
        };

        let mut unique_parents = Vec::new();
        for parent in parents.unwrap_or_default() {
            if !unique_parents.contains(&parent) {
                unique_parents.push(parent);
            }
        }

        CommitNode {
            oid,
            parents: unique_parents,
            children: BTreeSet::new(),
            flags,
        }
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn children(&self) -> impl Iterator<Item = &ObjectId> {
        self.children.iter()
    }

    pub fn has_parent(&self, oid: &ObjectId) -> bool {
        self.parents.contains(oid)
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn is_resolved(&self) -> bool {
        !self.flags.contains(NodeFlags::UNRESOLVED)
    }
}

/// Pending work for one commit on the traversal stack
struct Frame {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    next_parent: usize,
}

/// Commit DAG reachable from a set of tips, keyed by commit id
///
/// Every id is loaded at most once. The `order` lists all discovered commits
/// so that each one precedes every one of its parents.
#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    nodes: HashMap<ObjectId, CommitNode>,
    order: Vec<ObjectId>,
}

impl CommitGraph {
    /// Walk the history of every tip and build the graph
    ///
    /// # Arguments
    ///
    /// * `tips` - Starting commits, visited in the given order
    /// * `parent_loader` - Returns the parents of a commit, or `None` if the
    ///   commit cannot be resolved (it then becomes a root)
    ///
    /// Ties between independent histories are broken by visiting order, not by
    /// commit date: the last visited parent's line is printed first.
    pub fn build<'t, ParentLoaderFn>(
        tips: impl IntoIterator<Item = &'t ObjectId>,
        mut parent_loader: ParentLoaderFn,
    ) -> Result<Self>
    where
        ParentLoaderFn: FnMut(&ObjectId) -> Result<Option<Vec<ObjectId>>>,
    {
        let mut graph = CommitGraph::default();
        let mut stack = Vec::<Frame>::new();

        for tip in tips {
            if let Some(node) = graph.nodes.get_mut(tip) {
                node.flags |= NodeFlags::BRANCH_TIP;
                continue;
            }

            stack.push(graph.discover(tip, &mut parent_loader)?);
            if let Some(node) = graph.nodes.get_mut(tip) {
                node.flags |= NodeFlags::BRANCH_TIP;
            }

            while let Some(frame) = stack.last_mut() {
                let Some(parent) = frame.parents.get(frame.next_parent).cloned() else {
                    // all parents are emitted, so the commit itself can be
                    if let Some(done) = stack.pop() {
                        graph.order.push(done.oid);
                    }
                    continue;
                };
                frame.next_parent += 1;
                let child = frame.oid.clone();

                if !graph.nodes.contains_key(&parent) {
                    let parent_frame = graph.discover(&parent, &mut parent_loader)?;
                    stack.push(parent_frame);
                }
                if let Some(parent_node) = graph.nodes.get_mut(&parent) {
                    parent_node.children.insert(child);
                }
            }
        }

        graph.order.reverse();

        debug!(
            tips = graph
                .nodes
                .values()
                .filter(|node| node.flags().contains(NodeFlags::BRANCH_TIP))
                .count(),
            commits = graph.nodes.len(),
            unresolved = graph.nodes.values().filter(|node| !node.is_resolved()).count(),
            "built commit graph"
        );

        Ok(graph)
    }

    fn discover<ParentLoaderFn>(
        &mut self,
        oid: &ObjectId,
        parent_loader: &mut ParentLoaderFn,
    ) -> Result<Frame>
    where
        ParentLoaderFn: FnMut(&ObjectId) -> Result<Option<Vec<ObjectId>>>,
    {
        let node = CommitNode::new(oid.clone(), parent_loader(oid)?);
        let frame = Frame {
            oid: oid.clone(),
            parents: node.parents.clone(),
            next_parent: 0,
        };
        self.nodes.insert(oid.clone(), node);

        Ok(frame)
    }

    pub fn node(&self, oid: &ObjectId) -> Option<&CommitNode> {
        self.nodes.get(oid)
    }

    /// Commit ids, each before all of its parents
    pub fn order(&self) -> &[ObjectId] {
        &self.order
    }

    /// Nodes in topological order
    pub fn iter(&self) -> impl Iterator<Item = &CommitNode> {
        self.order.iter().filter_map(|oid| self.nodes.get(oid))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
