use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;

/// Validated branch name
///
/// Plain names (`master`, `feature-1`) name local branches; two-segment
/// names (`origin/master`) name remote-tracking branches and map to a
/// subdirectory under `refs/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();

        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let invalid = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)?;
        if invalid.is_match(&name) {
            anyhow::bail!("invalid branch name: {}", name);
        }

        if name.matches('/').count() > 1 {
            anyhow::bail!("invalid branch name: {}", name);
        }

        Ok(Self(name))
    }

    /// The remote-tracking split, if this is a `<remote>/<branch>` name
    pub fn remote_parts(&self) -> Option<(&str, &str)> {
        self.0.split_once('/')
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
