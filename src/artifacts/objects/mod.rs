//! Git object types
//!
//! Git stores all content as zlib-compressed objects identified by content hashes.
//! Only commits are decoded here, and only their header block:
//! `<type> <size>\0` followed by `tree`, `parent`, `author`... lines up to the
//! first blank line.

pub mod commit;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-256 hash in hexadecimal format
pub const SHA256_OBJECT_ID_LENGTH: usize = 64;
