use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Stage a file for addition
    ///
    /// Re-adding a file staged for removal only cancels the removal. A file
    /// whose contents match the head commit's blob is never staged; an
    /// earlier staged version of it is dropped.
    pub async fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        if index.contains_rm(path) {
            index.unstage_rm(path);
            index.write_updates()?;
            return Ok(());
        }

        if !self.workspace().file_exists(path) {
            anyhow::bail!(Diagnostic::FileMissing);
        }

        let blob = self.workspace().read_blob(path)?;
        let blob_oid = blob.object_id()?;

        let head = self.head_commit()?;
        if head.blob_for(path) == Some(&blob_oid) {
            // unmodified since the head commit; make sure nothing is staged
            index.unstage_add(path);
            index.write_updates()?;
            return Ok(());
        }

        self.database().store(&blob)?;
        index.stage_add(path, blob_oid);
        index.write_updates()?;

        Ok(())
    }
}
