use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::diagnostic::Diagnostic;

impl Repository {
    /// Create a branch at the current head
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name)?;

        if self.refs().branch_exists(&branch) {
            anyhow::bail!(Diagnostic::BranchExists);
        }

        let head_oid = self.head_oid()?;
        self.refs().set_branch(&branch, &head_oid)
    }

    /// Delete a branch (the pointer only; commits stay in the store)
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch =
            BranchName::try_parse(name).map_err(|_| Diagnostic::BranchMissing)?;

        if !self.refs().branch_exists(&branch) {
            anyhow::bail!(Diagnostic::BranchMissing);
        }

        if self.refs().head_branch()? == branch {
            anyhow::bail!(Diagnostic::CannotRemoveCurrent);
        }

        self.refs().delete_branch(&branch)
    }
}
