//! Branch names and the reverse branch map
//!
//! - `branch_name`: a branch name relative to `refs/heads`
//! - `branch_map`: commit id to the sorted names of the branches pointing at it

pub mod branch_map;
pub mod branch_name;

/// Suffix of the lock files git leaves next to refs while updating them
pub const REF_LOCK_SUFFIX: &str = ".lock";
