use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Show every commit in the object store, in no particular order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit in self.database().iter_commits()? {
            let oid = commit.object_id()?;
            self.print_commit_block(&oid, &commit)?;
        }

        Ok(())
    }
}
