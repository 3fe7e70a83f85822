use crate::areas::database::PrefixLookup;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Restore a file from the head commit
    pub async fn checkout_file(&mut self, path: &str) -> anyhow::Result<()> {
        let head = self.head_commit()?;
        self.restore_file_from(&head, path)
    }

    /// Restore a file from the commit named by an id prefix
    pub async fn checkout_file_at(&mut self, commit_prefix: &str, path: &str) -> anyhow::Result<()> {
        let (_, commit) = self.resolve_commit(commit_prefix)?;
        self.restore_file_from(&commit, path)
    }

    /// Switch to another branch, replacing the working tree with its head
    /// commit's snapshot
    pub async fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch =
            BranchName::try_parse(name).map_err(|_| Diagnostic::NoSuchBranch)?;
        if !self.refs().branch_exists(&branch) {
            anyhow::bail!(Diagnostic::NoSuchBranch);
        }

        let current_branch = self.refs().head_branch()?;
        if current_branch == branch {
            anyhow::bail!(Diagnostic::AlreadyOnBranch);
        }

        let target_oid = self
            .refs()
            .read_branch(&branch)?
            .ok_or_else(|| anyhow::anyhow!("branch {} has no commit", branch))?;
        let target = self.database().load_commit(&target_oid)?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        self.assert_no_untracked_overwrite(&index)?;
        self.replace_working_tree(&target, &mut index)?;
        index.write_updates()?;

        self.refs().set_head(&branch)?;

        Ok(())
    }

    fn restore_file_from(&self, commit: &Commit, path: &str) -> anyhow::Result<()> {
        let blob_oid = commit
            .blob_for(path)
            .ok_or(Diagnostic::FileNotInCommit)?;
        let blob = self.database().load_blob(blob_oid)?;

        self.workspace().write_file(path, blob.content())
    }

    /// Resolve a commit id or abbreviation, loading the commit
    pub(crate) fn resolve_commit(&self, prefix: &str) -> anyhow::Result<(ObjectId, Commit)> {
        match self.database().resolve_commit_prefix(prefix)? {
            PrefixLookup::Found(oid) => {
                let commit = self.database().load_commit(&oid)?;
                Ok((oid, commit))
            }
            PrefixLookup::NotFound | PrefixLookup::Ambiguous => {
                anyhow::bail!(Diagnostic::CommitNotFound)
            }
        }
    }

    /// Refuse to touch the working tree while an untracked file could be
    /// lost: every working file must be tracked by the current head commit
    /// or staged for addition
    ///
    /// The scan completes before any write or delete happens.
    pub(crate) fn assert_no_untracked_overwrite(&self, index: &Index) -> anyhow::Result<()> {
        let head = self.head_commit()?;

        for path in self.workspace().list_files()? {
            if !head.tracks(&path) && !index.contains_add(&path) {
                anyhow::bail!(Diagnostic::UntrackedOverwrite);
            }
        }

        Ok(())
    }

    /// Make the working tree exactly the target commit's snapshot and clear
    /// staging
    pub(crate) fn replace_working_tree(
        &self,
        target: &Commit,
        index: &mut Index,
    ) -> anyhow::Result<()> {
        let current_files = self.workspace().list_files()?;

        for (path, blob_oid) in target.tree() {
            let blob = self.database().load_blob(blob_oid)?;
            self.workspace().write_file(path, blob.content())?;
        }

        for path in current_files {
            if !target.tracks(&path) {
                self.workspace().delete_file(&path)?;
            }
        }

        index.clear();

        Ok(())
    }
}
