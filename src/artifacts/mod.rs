//! Git data structures and algorithms
//!
//! - `branch`: Branch names and the commit-to-branches map
//! - `log`: Commit graph construction and topological ordering
//! - `objects`: Object ids, object headers and commit parsing

pub mod branch;
pub mod log;
pub mod objects;
