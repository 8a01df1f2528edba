//! Reconstruct and print a repository's commit graph straight from its
//! loose object store, newest commits first, with branch names and markers
//! wherever the printed sequence leaves a parent chain.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
