//! Remote synchronization commands
//!
//! Remotes are other repositories on the local filesystem, named by records
//! under `.gitlet/remotes/`. Synchronization opens the remote as a second
//! `Repository` handle and copies object closures between the two stores:
//!
//! - `add_remote` / `rm_remote`: record management
//! - `push`: move a remote branch forward to the local head
//! - `fetch`: mirror a remote branch as `<remote>/<branch>` locally
//! - `pull`: fetch followed by a merge of the tracking branch

pub mod add_remote;
pub mod fetch;
pub mod pull;
pub mod push;
pub mod rm_remote;
mod transfer;
