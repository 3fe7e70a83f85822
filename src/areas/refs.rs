//! References (branches and HEAD)
//!
//! Branches are files under `.gitlet/refs/` holding a 40-hex commit id;
//! remote-tracking branches live one directory deeper as
//! `refs/<remote>/<branch>`. HEAD names the active branch, never a commit
//! directly, as a symbolic reference:
//!
//! ```text
//! ref: refs/<branch>
//! ```

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regex pattern for parsing the symbolic HEAD reference
const SYMREF_REGEX: &str = r"^ref: refs/(.+)$";

/// References manager
///
/// Reads and writes branch files and HEAD with exclusive file locks on
/// updates.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (`.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.refs_path().join(name.as_ref())
    }

    /// Point HEAD at a branch
    pub fn set_head(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), format!("ref: refs/{}", name))
    }

    /// The branch HEAD currently names
    pub fn head_branch(&self) -> anyhow::Result<BranchName> {
        let content = std::fs::read_to_string(self.head_path())
            .with_context(|| "failed to read HEAD")?;
        let content = content.trim();

        let symref = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .ok_or_else(|| anyhow::anyhow!("HEAD does not name a branch: {}", content))?;

        BranchName::try_parse(symref[1].to_string())
    }

    /// The commit id of the branch HEAD names
    pub fn read_head_oid(&self) -> anyhow::Result<ObjectId> {
        let branch = self.head_branch()?;
        self.read_branch(&branch)?
            .ok_or_else(|| anyhow::anyhow!("current branch {} has no commit", branch))
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Create or move a branch to point at a commit
    pub fn set_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(name), oid.as_ref().to_string())
    }

    /// Read the commit id a branch points at
    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(())
    }

    /// All branch names, including remote-tracking ones
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let refs_path = self.refs_path();

        Ok(WalkDir::new(&refs_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.path().is_file() {
                    let relative_path = entry.path().strip_prefix(&refs_path).ok()?;
                    let mut name = String::new();
                    for component in relative_path.components() {
                        if !name.is_empty() {
                            name.push('/');
                        }
                        name.push_str(&component.as_os_str().to_string_lossy());
                    }
                    Some(name)
                } else {
                    None
                }
            })
            .collect::<Vec<_>>())
    }

    fn update_ref_file(&self, path: PathBuf, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.refs_path().as_path()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
