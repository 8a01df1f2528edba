use crate::artifacts::objects::commit::CommitHeader;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, TopoError};
use bytes::Bytes;
use std::io::{Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only view of the loose object store (`.git/objects`)
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packfiles so that packed commits resolve instead of becoming roots
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Load the raw, decompressed content of a loose object
    ///
    /// Returns `None` when no loose object file exists for `object_id`.
    pub fn load(&self, object_id: &ObjectId) -> Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        match self.read_object(object_path, object_id)? {
            Some(content) => Ok(Some(content)),
            None => {
                debug!(oid = %object_id, "object is not loose, treating it as a root");
                Ok(None)
            }
        }
    }

    /// Parent ids of a commit, in the order they are stored
    ///
    /// Returns `None` for an unresolved commit, i.e. one without a loose object.
    pub fn load_commit_parents(&self, object_id: &ObjectId) -> Result<Option<Vec<ObjectId>>> {
        let Some(content) = self.load(object_id)? else {
            return Ok(None);
        };

        let mut object_reader = Cursor::new(content);
        let object_type = ObjectType::parse_object_type(&mut object_reader)
            .map_err(|e| TopoError::corrupt(object_id, e))?;
        if object_type != ObjectType::Commit {
            return Err(TopoError::corrupt(
                object_id,
                format!("expected a commit, found a {}", object_type),
            ));
        }

        let header = CommitHeader::deserialize(object_reader)
            .map_err(|e| TopoError::corrupt(object_id, format!("{:#}", e)))?;

        Ok(Some(header.into_parents()))
    }

    fn read_object(&self, object_path: PathBuf, object_id: &ObjectId) -> Result<Option<Bytes>> {
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TopoError::io(object_path, e)),
        };

        Self::decompress(object_content.into())
            .map(Some)
            .map_err(|e| TopoError::corrupt(object_id, format!("unable to decompress: {}", e)))
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
