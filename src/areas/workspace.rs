//! Working directory adapter
//!
//! Paths everywhere in the core are `/`-separated strings relative to the
//! working directory root. The adapter translates them to native paths,
//! enumerates working files (skipping `.gitlet`), and performs the reads,
//! writes, and deletes the commands ask for.

use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".gitlet", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_native(&self, path: &str) -> PathBuf {
        let mut native = self.path.to_path_buf();
        for segment in path.split('/') {
            native.push(segment);
        }
        native
    }

    fn to_relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        let mut name = String::new();
        for component in relative.components() {
            if !name.is_empty() {
                name.push('/');
            }
            name.push_str(&component.as_os_str().to_string_lossy());
        }
        Some(name)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    /// All working files as relative path strings, in walk order
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        Ok(WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.is_file() && !Self::is_ignored(path) {
                    self.to_relative(path)
                } else {
                    None
                }
            })
            .collect::<Vec<_>>())
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.to_native(path).is_file()
    }

    pub fn read_file(&self, path: &str) -> anyhow::Result<Bytes> {
        let native = self.to_native(path);
        let content =
            std::fs::read(&native).with_context(|| format!("failed to read file {}", path))?;

        Ok(Bytes::from(content))
    }

    /// Read a working file as a blob
    pub fn read_blob(&self, path: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(path)?))
    }

    pub fn write_file(&self, path: &str, content: &[u8]) -> anyhow::Result<()> {
        let native = self.to_native(path);

        if let Some(parent) = native.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directories for {}", path))?;
        }

        std::fs::write(&native, content).with_context(|| format!("failed to write file {}", path))
    }

    /// Delete a working file if it exists, pruning directories it leaves
    /// empty
    pub fn delete_file(&self, path: &str) -> anyhow::Result<()> {
        let native = self.to_native(path);
        if !native.exists() {
            return Ok(());
        }

        std::fs::remove_file(&native).with_context(|| format!("failed to delete file {}", path))?;
        self.prune_empty_parent_dirs(&native)?;

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.exists()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("failed to remove empty directory at {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
