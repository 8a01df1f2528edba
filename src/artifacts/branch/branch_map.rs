use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Mapping from a commit id to every branch whose tip it is
///
/// Keys iterate in ascending id order and each name list is kept sorted,
/// so traversal and printing never depend on directory listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchMap {
    tips: BTreeMap<ObjectId, Vec<BranchName>>,
}

impl BranchMap {
    pub fn insert(&mut self, oid: ObjectId, name: BranchName) {
        let names = self.tips.entry(oid).or_default();
        if let Err(position) = names.binary_search(&name) {
            names.insert(position, name);
        }
    }

    /// Branch names pointing at `oid`, sorted ascending; empty if none
    pub fn names(&self, oid: &ObjectId) -> &[BranchName] {
        self.tips.get(oid).map(Vec::as_slice).unwrap_or_default()
    }

    /// Distinct branch tip commits in ascending id order
    pub fn tips(&self) -> impl Iterator<Item = &ObjectId> {
        self.tips.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }
}

impl FromIterator<(ObjectId, BranchName)> for BranchMap {
    fn from_iter<I: IntoIterator<Item = (ObjectId, BranchName)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(BranchMap::default(), |mut acc, (oid, name)| {
                acc.insert(oid, name);
                acc
            })
    }
}
