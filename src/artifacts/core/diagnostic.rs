//! User-visible operation outcomes
//!
//! Every way an operation can refuse to proceed is one of these variants,
//! each carrying its canonical message. Commands bail with a `Diagnostic`;
//! the CLI front-end downcasts it, prints the message on stdout, and exits
//! with status 0. Anything else that goes wrong is a real error and keeps
//! the usual nonzero-exit path.

use thiserror::Error;

/// The closed taxonomy of refusals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileMissing,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No changes added to the commit.")]
    NoChanges,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    /// Checkout wording for a missing branch
    #[error("No such branch exists.")]
    NoSuchBranch,

    /// rm-branch / merge / fetch wording for a missing branch
    #[error("A branch with that name does not exist.")]
    BranchMissing,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedOverwrite,

    #[error("Found no commit with that message.")]
    NoMatch,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("Given branch is an ancestor of the current branch.")]
    AlreadyUpToDate,

    #[error("A remote with that name already exists.")]
    RemoteExists,

    #[error("A remote with that name does not exist.")]
    RemoteMissing,

    #[error("Remote directory not found.")]
    RemoteUnreachable,

    #[error("Please pull down remote changes before pushing.")]
    RemoteAhead,
}

/// Notice printed once when a merge hits its first conflicting path
pub const MERGE_CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

/// Notice printed when a merge fast-forwards the current branch
pub const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
