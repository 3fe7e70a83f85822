use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Record the staged snapshot as a new commit on the current branch
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            anyhow::bail!(Diagnostic::EmptyMessage);
        }

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        if index.is_empty() {
            anyhow::bail!(Diagnostic::NoChanges);
        }

        self.write_commit(&mut index, message.to_string(), None)?;

        Ok(())
    }

    /// Write a commit whose tree is the head tree plus the staged additions
    /// minus the staged removals, move the current branch to it, and clear
    /// staging
    ///
    /// The commit and every blob it references are in the store before the
    /// branch moves.
    pub(crate) fn write_commit(
        &self,
        index: &mut Index,
        message: String,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<Commit> {
        let head_oid = self.head_oid()?;
        let head = self.database().load_commit(&head_oid)?;

        let mut tree = head.tree().clone();
        for (path, oid) in index.additions() {
            tree.insert(path.clone(), oid.clone());
        }
        for path in index.removals() {
            tree.remove(path);
        }

        let commit = Commit::new(message, tree, Some(head_oid), second_parent);
        let commit_oid = self.database().store(&commit)?;

        let branch = self.refs().head_branch()?;
        self.refs().set_branch(&branch, &commit_oid)?;

        index.clear();
        index.write_updates()?;

        Ok(commit)
    }
}
