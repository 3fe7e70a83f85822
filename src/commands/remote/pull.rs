use crate::areas::repository::Repository;

impl Repository {
    /// Fetch a remote branch, then merge its tracking branch
    pub async fn pull(&mut self, remote_name: &str, branch_name: &str) -> anyhow::Result<()> {
        self.fetch(remote_name, branch_name)?;

        let tracking = format!("{}/{}", remote_name, branch_name);
        self.merge(&tracking).await
    }
}
