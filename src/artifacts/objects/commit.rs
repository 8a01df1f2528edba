//! Git commit object headers
//!
//! ## Format
//!
//! After the `commit <size>\0` prefix, a commit consists of header lines, a blank
//! line and a free-form message:
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Only the `parent` lines are kept. The message is never read.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::BufRead;

const PARENT_PREFIX: &str = "parent ";

/// Parent links of a commit, in the order they appear in the object
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CommitHeader {
    parents: Vec<ObjectId>,
}

impl CommitHeader {
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn into_parents(self) -> Vec<ObjectId> {
        self.parents
    }

    /// Parse the header block of a commit whose `<type> <size>\0` prefix
    /// has already been consumed
    pub fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut parents = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            if line.is_empty() {
                // end of headers, the message follows
                break;
            }

            let header = std::str::from_utf8(&line).context("Commit header is not valid UTF-8")?;
            if let Some(parent) = header.strip_prefix(PARENT_PREFIX) {
                let parent = ObjectId::try_parse(parent.trim().to_string())
                    .with_context(|| format!("Invalid parent line: {:?}", header))?;
                parents.push(parent);
            }
        }

        Ok(CommitHeader { parents })
    }
}
