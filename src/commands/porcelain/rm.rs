use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;

impl Repository {
    /// Stage a file for removal
    ///
    /// A staged addition is unstaged. A file tracked by the head commit is
    /// additionally staged for removal and deleted from the working
    /// directory (an already-absent working file is fine).
    pub async fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let head = self.head_commit()?;
        let staged = index.contains_add(path);
        let tracked = head.tracks(path);

        if !staged && !tracked {
            anyhow::bail!(Diagnostic::NothingToRemove);
        }

        if staged {
            index.unstage_add(path);
        }

        if tracked {
            index.stage_rm(path);
            self.workspace().delete_file(path)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
