//! Repository abstraction and coordination
//!
//! This module provides the main `Repository` type that coordinates all
//! repository operations. It acts as a facade over the lower-level components
//! (database, index, workspace, refs, remotes); the user verbs are
//! implemented as `impl Repository` blocks under `commands/`.
//!
//! ## Architecture
//!
//! The repository maintains references to:
//! - Database: Object storage (blobs, commits)
//! - Index: Staging area for pending additions and removals
//! - Workspace: Working directory operations
//! - Refs: Branch and HEAD management
//! - Remotes: Records of other repositories on disk
//!
//! The CLI constructs one handle per invocation; remote synchronization opens
//! a second handle rooted at the remote's recorded path.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remotes::Remotes;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::RefCell;
use std::cell::RefMut;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Repository directory name
pub const GITLET_DIR: &str = ".gitlet";

/// Index file name
const INDEX_FILE: &str = "index";

/// Remotes directory name
const REMOTES_DIR: &str = "remotes";

/// Gitlet repository
///
/// Coordinates all repository operations and provides access to the
/// database, index, workspace, refs, and remotes subsystems.
///
/// ## Usage
///
/// ```ignore
/// let mut repo = Repository::new(PathBuf::from("."), Box::new(stdout()))?;
/// repo.init().await?;
/// repo.add("file.txt").await?;
/// repo.commit("first").await?;
/// ```
pub struct Repository {
    /// Working directory root
    path: Box<Path>,
    /// Output writer (stdout, or a capture buffer in tests)
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Staging area with locked access
    index: Arc<Mutex<Index>>,
    /// Object database
    database: Database,
    /// Working directory
    workspace: Workspace,
    /// Reference manager
    refs: Refs,
    /// Remote records
    remotes: Remotes,
}

impl Repository {
    pub fn new(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let gitlet_path = path.join(GITLET_DIR);

        let index = Index::new(gitlet_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(gitlet_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(gitlet_path.clone().into_boxed_path());
        let remotes = Remotes::new(gitlet_path.join(REMOTES_DIR).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
            remotes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> PathBuf {
        self.path.join(GITLET_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn remotes(&self) -> &Remotes {
        &self.remotes
    }

    /// The commit the current branch points at
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        let head_oid = self.head_oid()?;
        self.database.load_commit(&head_oid)
    }

    /// The commit id the current branch points at
    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        self.refs.read_head_oid()
    }
}
