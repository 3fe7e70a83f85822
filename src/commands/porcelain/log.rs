use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, DISPLAY_OFFSET};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Show the current branch's history, newest first
    ///
    /// Walks first-parent links only; second parents of merge commits are
    /// shown on the `Merge:` line but not followed.
    pub fn log(&self) -> anyhow::Result<()> {
        let mut current = Some(self.head_oid()?);

        while let Some(oid) = current {
            let commit = self.database().load_commit(&oid)?;
            self.print_commit_block(&oid, &commit)?;
            current = commit.parent().cloned();
        }

        Ok(())
    }

    /// One log block:
    ///
    /// ```text
    /// ===
    /// commit <oid>
    /// Merge: <first7> <second7>     (merge commits only)
    /// Date: <timestamp> -0800
    /// <message>
    /// <blank line>
    /// ```
    pub(crate) fn print_commit_block(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", oid)?;
        if let Some((parent, second_parent)) = commit.parent().zip(commit.second_parent()) {
            writeln!(
                writer,
                "Merge: {} {}",
                parent.to_short_oid(),
                second_parent.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {} {}", commit.timestamp(), DISPLAY_OFFSET)?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
