//! Repository discovery
//!
//! The working tree root is the closest ancestor of the start directory
//! (the start directory included) that contains a `.git` directory.

use crate::errors::{Result, TopoError};
use std::path::Path;
use tracing::debug;

/// Name of the repository metadata directory
pub const GIT_DIR_NAME: &str = ".git";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Walk upward from `start` until a directory containing `.git` is found
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .map_err(|e| TopoError::io(start, e))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR_NAME).is_dir())
            .ok_or_else(|| TopoError::NotARepository {
                start: start.clone(),
            })?;

        debug!(root = %root.display(), "located repository");
        Ok(Workspace::new(root.into()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR_NAME).into_boxed_path()
    }
}
