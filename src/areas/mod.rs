//! Core repository components
//!
//! This module contains the read-only views of a Git repository:
//!
//! - `database`: Loose object store, decompression and commit header decoding
//! - `refs`: Local branch references
//! - `repository`: Coordination of the areas and the output writer
//! - `workspace`: Discovery of the repository root

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
