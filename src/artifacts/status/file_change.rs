/// Unstaged change to a tracked or staged file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    /// Present in the working directory with different contents
    Modified,
    /// Absent from the working directory
    Deleted,
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileChange::Modified => write!(f, "modified"),
            FileChange::Deleted => write!(f, "deleted"),
        }
    }
}
