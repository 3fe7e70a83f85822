//! Object store
//!
//! The database stores both object kinds using content-addressable storage:
//! blobs under `.gitlet/blobs/<oid>` as raw bytes, commits under
//! `.gitlet/commits/<oid>` as binary records. Objects are write-once; storing
//! an object that already exists is a no-op.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of resolving an abbreviated commit id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixLookup {
    /// Exactly one commit matches the prefix
    Found(ObjectId),
    /// No commit matches
    NotFound,
    /// More than one commit matches
    Ambiguous,
}

/// Content-addressed object database
#[derive(Debug)]
pub struct Database {
    /// Path to the repository directory (`.gitlet`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn blobs_path(&self) -> PathBuf {
        self.path.join(ObjectKind::Blob.store_dir())
    }

    pub fn commits_path(&self) -> PathBuf {
        self.path.join(ObjectKind::Commit.store_dir())
    }

    fn object_path(&self, kind: ObjectKind, object_id: &ObjectId) -> PathBuf {
        self.path.join(kind.store_dir()).join(object_id.as_ref())
    }

    /// Store an object, returning its id
    ///
    /// The object is serialized and written under its SHA-1 name. Existing
    /// objects are left untouched.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.object_path(object.object_kind(), &object_id);

        if !object_path.exists() {
            let object_content = object.serialize()?;
            self.write_object(object_path, object_content)?;
        }

        Ok(object_id)
    }

    pub fn contains_blob(&self, object_id: &ObjectId) -> bool {
        self.object_path(ObjectKind::Blob, object_id).exists()
    }

    pub fn contains_commit(&self, object_id: &ObjectId) -> bool {
        self.object_path(ObjectKind::Commit, object_id).exists()
    }

    /// Load a blob, failing when it is absent
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_path = self.object_path(ObjectKind::Blob, object_id);
        let content = std::fs::read(&object_path)
            .with_context(|| format!("blob {} not found in object store", object_id))?;

        Blob::deserialize(content.as_slice())
    }

    /// Load a commit, failing when it is absent
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_path = self.object_path(ObjectKind::Commit, object_id);
        let content = std::fs::read(&object_path)
            .with_context(|| format!("commit {} not found in object store", object_id))?;

        Commit::deserialize(content.as_slice())
    }

    /// All commits in the store, in no particular order
    pub fn iter_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let commits_path = self.commits_path();
        if !commits_path.exists() {
            return Ok(Vec::new());
        }

        let mut commits = Vec::new();
        for entry in std::fs::read_dir(&commits_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let object_id = ObjectId::try_parse(file_name.to_string_lossy().to_string())?;
            commits.push(self.load_commit(&object_id)?);
        }

        Ok(commits)
    }

    /// Resolve an abbreviated commit id
    ///
    /// A full 40-hex argument is looked up directly; shorter prefixes scan
    /// the commit directory. Multiple matches are reported as ambiguous.
    pub fn resolve_commit_prefix(&self, prefix: &str) -> anyhow::Result<PrefixLookup> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(PrefixLookup::NotFound);
        }

        if let Ok(object_id) = ObjectId::try_parse(prefix.to_string()) {
            return Ok(if self.contains_commit(&object_id) {
                PrefixLookup::Found(object_id)
            } else {
                PrefixLookup::NotFound
            });
        }

        let commits_path = self.commits_path();
        if !commits_path.exists() {
            return Ok(PrefixLookup::NotFound);
        }

        let prefix = prefix.to_ascii_lowercase();
        let mut matched = None;
        for entry in std::fs::read_dir(&commits_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(&prefix) {
                if matched.is_some() {
                    return Ok(PrefixLookup::Ambiguous);
                }
                matched = Some(ObjectId::try_parse(file_name.to_string())?);
            }
        }

        Ok(match matched {
            Some(object_id) => PrefixLookup::Found(object_id),
            None => PrefixLookup::NotFound,
        })
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;

        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;

        // write to a temp name, then rename into place to make it atomic
        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

/// Commit cache for graph traversal algorithms
///
/// Serves `SlimCommit` projections, reading each commit file at most once
/// per cache lifetime. Traversals like the split-point search revisit the
/// same commits repeatedly; the cache keeps that cheap.
#[derive(Debug, Default)]
pub struct CommitCache {
    commits: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the slim projection of a commit, loading it from the database on
    /// first access
    pub fn get_or_load(&self, database: &Database, object_id: &ObjectId) -> anyhow::Result<SlimCommit> {
        if let Some(slim) = self.commits.borrow().get(object_id) {
            return Ok(slim.clone());
        }

        let commit = database.load_commit(object_id)?;
        let slim = SlimCommit {
            oid: object_id.clone(),
            parents: commit.parents(),
        };

        self.commits
            .borrow_mut()
            .insert(object_id.clone(), slim.clone());

        Ok(slim)
    }
}
