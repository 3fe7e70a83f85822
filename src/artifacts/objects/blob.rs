//! Gitlet blob object
//!
//! Blobs store file content. They contain only the raw file bytes, without
//! any metadata like filename or permissions.
//!
//! ## Format
//!
//! On disk: the raw bytes, unframed. The blob's object ID is therefore the
//! SHA-1 of the file contents themselves.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_kind::ObjectKind;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Blobs are the fundamental unit of file storage. Each unique file content
/// is stored as one blob, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Raw file bytes
    content: Bytes,
}

impl Blob {
    /// Get the raw file bytes
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Blob
    }
}
