use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;

impl Repository {
    /// Record a remote name pointing at another repository's working
    /// directory
    pub fn add_remote(&mut self, name: &str, path: &str) -> anyhow::Result<()> {
        if self.remotes().contains(name) {
            anyhow::bail!(Diagnostic::RemoteExists);
        }

        self.remotes().add(name, path)
    }
}
