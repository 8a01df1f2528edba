//! Git references (local branches)
//!
//! Only `refs/heads` is read. Every regular file below it is a branch whose
//! name is its path relative to `refs/heads`, so `refs/heads/feature/foo`
//! is the branch `feature/foo`.
//!
//! ## File Format
//!
//! A branch file contains the hexadecimal id of its tip commit, optionally
//! followed by whitespace.

use crate::artifacts::branch::REF_LOCK_SUFFIX;
use crate::artifacts::branch::branch_map::BranchMap;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, TopoError};
use derive_new::new;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Read every local branch into a map from tip commit to branch names
    ///
    /// A repository without any branch yields an empty map.
    pub fn branch_map(&self) -> Result<BranchMap> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            return Ok(BranchMap::default());
        }

        let mut branches = BranchMap::default();
        for entry in WalkDir::new(&heads_path)
            .follow_links(true)
            .sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| heads_path.to_path_buf());
                TopoError::io(path, e.into())
            })?;

            if !entry.file_type().is_file()
                || entry.file_name().to_string_lossy().ends_with(REF_LOCK_SUFFIX)
            {
                continue;
            }

            let name = Self::branch_name(&heads_path, entry.path());
            let oid = self.read_ref_file(entry.path(), &name)?;
            branches.insert(oid, name);
        }

        debug!(tips = branches.len(), "read local branches");
        Ok(branches)
    }

    fn branch_name(heads_path: &Path, path: &Path) -> BranchName {
        let relative_path = path.strip_prefix(heads_path).unwrap_or(path);
        let components = relative_path
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        BranchName::from_components(components.iter().map(String::as_str))
    }

    fn read_ref_file(&self, path: &Path, name: &BranchName) -> Result<ObjectId> {
        let content = std::fs::read_to_string(path).map_err(|e| TopoError::io(path, e))?;
        let content = content.trim();

        ObjectId::try_parse(content.to_string()).map_err(|_| TopoError::MalformedRef {
            name: name.to_string(),
            content: content.to_string(),
        })
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
