//! Remote records
//!
//! A remote is a name mapped to the working-directory path of another
//! repository on the local filesystem, one text file per remote under
//! `.gitlet/remotes/`.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Remotes {
    /// Path to the remotes directory (`.gitlet/remotes`)
    path: Box<Path>,
}

impl Remotes {
    fn record_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.record_path(name).is_file()
    }

    /// Record a remote, normalizing separators to the host's
    pub fn add(&self, name: &str, remote_path: &str) -> anyhow::Result<()> {
        let normalized = remote_path
            .replace(['/', '\\'], &std::path::MAIN_SEPARATOR.to_string());

        std::fs::create_dir_all(&self.path)
            .context("failed to create remotes directory")?;
        std::fs::write(self.record_path(name), normalized)
            .with_context(|| format!("failed to record remote {}", name))
    }

    pub fn remove(&self, name: &str) -> anyhow::Result<()> {
        std::fs::remove_file(self.record_path(name))
            .with_context(|| format!("failed to remove remote {}", name))
    }

    /// The recorded path of a remote, if it exists
    pub fn read(&self, name: &str) -> anyhow::Result<Option<PathBuf>> {
        let record_path = self.record_path(name);
        if !record_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&record_path)
            .with_context(|| format!("failed to read remote {}", name))?;

        Ok(Some(PathBuf::from(content.trim())))
    }
}
