use crate::areas::repository::Repository;

impl Repository {
    /// Move the current branch to a commit, replacing the working tree with
    /// its snapshot
    ///
    /// The untracked-overwrite rule is the same as for switching branches.
    pub async fn reset(&mut self, commit_prefix: &str) -> anyhow::Result<()> {
        let (target_oid, target) = self.resolve_commit(commit_prefix)?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        self.assert_no_untracked_overwrite(&index)?;
        self.replace_working_tree(&target, &mut index)?;
        index.write_updates()?;

        let branch = self.refs().head_branch()?;
        self.refs().set_branch(&branch, &target_oid)?;

        Ok(())
    }
}
