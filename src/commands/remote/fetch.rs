use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::commands::remote::transfer::{copy_objects, open_remote};

impl Repository {
    /// Mirror a remote branch into the local store
    ///
    /// Copies the branch head and every ancestor not already present,
    /// together with their blobs, then creates or moves the local tracking
    /// branch `<remote>/<branch>`.
    pub fn fetch(&mut self, remote_name: &str, branch_name: &str) -> anyhow::Result<()> {
        let remote = open_remote(self, remote_name)?;

        let branch =
            BranchName::try_parse(branch_name).map_err(|_| Diagnostic::BranchMissing)?;
        let remote_oid = remote
            .refs()
            .read_branch(&branch)?
            .ok_or(Diagnostic::BranchMissing)?;

        copy_objects(&remote, self, &remote_oid)?;

        let tracking = BranchName::try_parse(format!("{}/{}", remote_name, branch_name))?;
        self.refs().set_branch(&tracking, &remote_oid)?;

        Ok(())
    }
}
