use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::Result;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    pub fn new(workspace: Workspace, writer: Box<dyn std::io::Write>) -> Self {
        let git_path = workspace.git_path();
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path);

        Repository {
            workspace,
            writer: RefCell::new(writer),
            database,
            refs,
        }
    }

    /// Open the repository enclosing `start`
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        Ok(Self::new(Workspace::discover(start)?, writer))
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
