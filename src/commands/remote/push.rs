use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::commands::remote::transfer::{copy_objects, open_remote};

impl Repository {
    /// Move a remote branch forward to the local head
    ///
    /// The remote branch must be an ancestor of the local head along
    /// first-parent links; otherwise the remote has commits the local branch
    /// has not pulled. Missing remote branches are created. Commits and the
    /// blobs they reference are copied before the remote ref moves.
    pub fn push(&mut self, remote_name: &str, branch_name: &str) -> anyhow::Result<()> {
        let remote = open_remote(self, remote_name)?;

        let head_oid = self.head_oid()?;
        let branch = BranchName::try_parse(branch_name)?;

        if let Some(remote_oid) = remote.refs().read_branch(&branch)? {
            let mut cursor = Some(head_oid.clone());
            let mut found = false;

            while let Some(oid) = cursor {
                if oid == remote_oid {
                    found = true;
                    break;
                }
                cursor = self.database().load_commit(&oid)?.parent().cloned();
            }

            if !found {
                anyhow::bail!(Diagnostic::RemoteAhead);
            }
        }

        copy_objects(self, &remote, &head_oid)?;
        remote.refs().set_branch(&branch, &head_oid)?;

        Ok(())
    }
}
