use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create the repository layout, the initial commit, and `master`
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            anyhow::bail!(Diagnostic::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().blobs_path())
            .context("Failed to create .gitlet/blobs directory")?;
        fs::create_dir_all(self.database().commits_path())
            .context("Failed to create .gitlet/commits directory")?;
        fs::create_dir_all(self.refs().refs_path())
            .context("Failed to create .gitlet/refs directory")?;
        fs::create_dir_all(self.gitlet_path().join("remotes"))
            .context("Failed to create .gitlet/remotes directory")?;

        let initial_commit = Commit::initial();
        let initial_oid = self.database().store(&initial_commit)?;

        let master = BranchName::try_parse(DEFAULT_BRANCH)?;
        self.refs().set_branch(&master, &initial_oid)?;
        self.refs().set_head(&master)?;

        let index = self.index();
        let mut index = index.lock().await;
        index.write_updates()?;

        Ok(())
    }
}
