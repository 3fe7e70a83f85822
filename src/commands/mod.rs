//! Command implementations
//!
//! This module contains all command implementations, organized into two
//! categories:
//!
//! - `porcelain`: User-facing verbs against the local repository (init, add,
//!   commit, log, status, checkout, branch, reset, merge, ...)
//! - `remote`: Synchronization with other repositories on disk (add-remote,
//!   rm-remote, push, fetch, pull)
//!
//! Remote commands sit above the porcelain verbs and reuse them.

pub mod porcelain;
pub mod remote;
