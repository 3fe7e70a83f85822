//! Staging area record format
//!
//! The staging area (the index) persists as one binary record under
//! `.gitlet/index`:
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "GLIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Addition count (4 bytes)
//!   - Removal count (4 bytes)
//!
//! Additions: per entry, a length-prefixed path and a 20-byte blob id
//! Removals:  per entry, a length-prefixed path
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of the index header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "GLIX";

/// Index file format version
pub const VERSION: u32 = 1;
