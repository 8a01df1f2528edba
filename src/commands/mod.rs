//! Command implementations
//!
//! - `porcelain`: User-facing commands built on the repository areas

pub mod porcelain;
