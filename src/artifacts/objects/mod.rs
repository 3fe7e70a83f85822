//! Gitlet object types and operations
//!
//! Gitlet stores all content as objects identified by SHA-1 hashes. There are
//! two kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot with metadata (message, timestamp, tree, parent links)
//!
//! Both kinds implement serialization/deserialization to the binary record
//! formats stored under `.gitlet/blobs/` and `.gitlet/commits/`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_kind;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
