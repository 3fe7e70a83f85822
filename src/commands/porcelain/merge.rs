use crate::areas::database::CommitCache;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::{Diagnostic, FAST_FORWARD_NOTICE, MERGE_CONFLICT_NOTICE};
use crate::artifacts::merge::resolution::{MergeAction, classify, conflict_bytes};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;

impl Repository {
    /// Merge another branch into the current one
    ///
    /// Pre-checks, in order: staging must be empty, the branch must exist,
    /// the two heads must differ, and no untracked working file may be in
    /// the way. A split point equal to the given head means there is nothing
    /// to do; a split point equal to the current head fast-forwards. Anything
    /// else is a real three-way merge ending in a merge commit.
    pub async fn merge(&mut self, target_branch: &str) -> anyhow::Result<()> {
        let index_handle = self.index();
        let mut index = index_handle.lock().await;

        index.rehydrate()?;

        if !index.is_empty() {
            anyhow::bail!(Diagnostic::UncommittedChanges);
        }

        let branch =
            BranchName::try_parse(target_branch).map_err(|_| Diagnostic::BranchMissing)?;
        if !self.refs().branch_exists(&branch) {
            anyhow::bail!(Diagnostic::BranchMissing);
        }

        let head_oid = self.head_oid()?;
        let other_oid = self
            .refs()
            .read_branch(&branch)?
            .ok_or_else(|| anyhow::anyhow!("branch {} has no commit", branch))?;

        if head_oid == other_oid {
            anyhow::bail!(Diagnostic::SelfMerge);
        }

        self.assert_no_untracked_overwrite(&index)?;

        let split_oid = {
            let commit_cache = CommitCache::new();
            let database = self.database();
            let finder = SplitPointFinder::new(|oid: &ObjectId| {
                commit_cache
                    .get_or_load(database, oid)
                    .expect("Failed to load commit")
            });
            finder
                .find_split_point(&head_oid, &other_oid)
                .ok_or_else(|| anyhow::anyhow!("no common ancestor between the branch heads"))?
        };

        if split_oid == other_oid {
            anyhow::bail!(Diagnostic::AlreadyUpToDate);
        }

        if split_oid == head_oid {
            // The given branch is strictly ahead; checking it out is the
            // whole merge.
            drop(index);
            self.checkout_branch(target_branch).await?;
            writeln!(self.writer(), "{}", FAST_FORWARD_NOTICE)?;
            return Ok(());
        }

        let database = self.database();
        let split = database.load_commit(&split_oid)?;
        let head = database.load_commit(&head_oid)?;
        let other = database.load_commit(&other_oid)?;

        let paths = split
            .tree()
            .keys()
            .chain(head.tree().keys())
            .chain(other.tree().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut conflicted = false;
        for path in &paths {
            let action = classify(
                split.blob_for(path),
                head.blob_for(path),
                other.blob_for(path),
            );

            match action {
                MergeAction::KeepCurrent => {}
                MergeAction::TakeOther(blob_oid) => {
                    let blob = database.load_blob(&blob_oid)?;
                    self.workspace().write_file(path, blob.content())?;
                    index.stage_add(path, blob_oid);
                }
                MergeAction::Remove => {
                    index.stage_rm(path);
                    self.workspace().delete_file(path)?;
                }
                MergeAction::Conflict => {
                    conflicted = true;

                    let head_content = self.blob_content(head.blob_for(path))?;
                    let other_content = self.blob_content(other.blob_for(path))?;
                    let rendered = conflict_bytes(head_content.as_ref(), other_content.as_ref());

                    self.workspace().write_file(path, &rendered)?;
                    let conflict_blob = Blob::new(rendered);
                    let conflict_oid = database.store(&conflict_blob)?;
                    index.stage_add(path, conflict_oid);
                }
            }
        }

        let current_branch = self.refs().head_branch()?;
        let message = format!("Merged {} into {}.", branch, current_branch);
        self.write_commit(&mut index, message, Some(other_oid))?;

        if conflicted {
            writeln!(self.writer(), "{}", MERGE_CONFLICT_NOTICE)?;
        }

        Ok(())
    }

    fn blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        match oid {
            Some(oid) => Ok(Some(self.database().load_blob(oid)?.into_content())),
            None => Ok(None),
        }
    }
}
