//! Error types for topo-order
//!
//! Missing loose objects are not represented here: the object reader reports them
//! as `None` and the traversal treats them as root commits.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading repository state
#[derive(Debug, Error)]
pub enum TopoError {
    /// No `.git` directory was found walking upward from the start directory
    #[error("Not inside a Git repository (searched upward from {})", .start.display())]
    NotARepository {
        /// The directory the search started from
        start: PathBuf,
    },

    /// A ref file or object file could not be read
    #[error("Unable to read {}: {source}", .path.display())]
    Io {
        /// The file or directory that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A branch ref file does not contain a commit identifier
    #[error("Branch {name} does not point to a valid object id: {content:?}")]
    MalformedRef {
        /// The branch name relative to `refs/heads`
        name: String,
        /// The trimmed file content
        content: String,
    },

    /// A loose object exists but cannot be decompressed or decoded as a commit
    #[error("Corrupt object {oid}: {reason}")]
    CorruptObject {
        /// The identifier of the object that failed to decode
        oid: String,
        /// What went wrong
        reason: String,
    },
}

impl TopoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TopoError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(oid: impl ToString, reason: impl ToString) -> Self {
        TopoError::CorruptObject {
            oid: oid.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TopoError>;
