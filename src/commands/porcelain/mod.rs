//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `topo_order`: Print every branch's history in topological order

pub mod topo_order;
