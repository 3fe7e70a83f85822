use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::report::StatusReport;
use std::collections::BTreeMap;

// Terminology:
// - staged files: paths staged for addition
// - removed files: paths staged for removal
// - modifications not staged: staged or head-tracked paths whose working
//   copy diverges (or is gone)
// - untracked files: working files neither head-tracked nor staged
impl Repository {
    /// Print the five-section status report
    pub async fn display_status(&mut self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let head = self.head_commit()?;
        let current_branch = self.refs().head_branch()?;

        let mut report = StatusReport::default();

        for name in self.refs().list_branches()? {
            let is_current = name == current_branch.as_ref();
            report.branches.push((name, is_current));
        }

        report.staged = index.additions().keys().cloned().collect();
        report.removed = index.removals().iter().cloned().collect();

        let mut modifications: BTreeMap<String, FileChange> = BTreeMap::new();

        for (path, staged_oid) in index.additions() {
            if !self.workspace().file_exists(path) {
                modifications.insert(path.clone(), FileChange::Deleted);
            } else if self.workspace().read_blob(path)?.object_id()? != *staged_oid {
                modifications.insert(path.clone(), FileChange::Modified);
            }
        }

        for (path, head_oid) in head.tree() {
            if index.contains_rm(path) {
                continue;
            }

            if !self.workspace().file_exists(path) {
                modifications.entry(path.clone()).or_insert(FileChange::Deleted);
            } else if !index.contains_add(path)
                && self.workspace().read_blob(path)?.object_id()? != *head_oid
            {
                modifications.insert(path.clone(), FileChange::Modified);
            }
        }

        report.modifications = modifications.into_iter().collect();

        for path in self.workspace().list_files()? {
            if !head.tracks(&path) && !index.contains_add(&path) {
                report.untracked.push(path);
            }
        }

        report.sort();
        report.render(&mut **self.writer())?;

        Ok(())
    }
}
