use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;

impl Repository {
    /// Forget a remote record (the remote repository itself is untouched)
    pub fn rm_remote(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.remotes().contains(name) {
            anyhow::bail!(Diagnostic::RemoteMissing);
        }

        self.remotes().remove(name)
    }
}
