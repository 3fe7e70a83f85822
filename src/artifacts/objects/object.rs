//! Core object traits
//!
//! This module defines the fundamental traits that both object kinds implement:
//! - `Packable`: Serialization to the stored record format
//! - `Unpackable`: Deserialization from the stored record format
//! - `Object`: Common object operations (ID computation, display)
//!
//! The default object ID is the SHA-1 of the serialized record. Blobs use it
//! directly (their record is the raw file bytes); commits override it because
//! their digest covers a subset of the stored record.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Trait for serializing objects to their stored record format
pub trait Packable {
    /// Serialize the object to bytes
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserializing objects from their stored record format
pub trait Unpackable {
    /// Deserialize the object from a reader
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Core object trait
///
/// Implemented by both object kinds (Blob, Commit).
/// Provides kind tagging and ID computation.
pub trait Object: Packable {
    /// Get the object's kind
    fn object_kind(&self) -> ObjectKind;

    /// Compute the object ID (SHA-1 hash)
    ///
    /// The default hashes the serialized record.
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        ObjectId::try_parse(sha1_hex(&content))
    }
}

/// SHA-1 of a byte slice as a 40-hex string
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
