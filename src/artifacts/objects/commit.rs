//! Gitlet commit object
//!
//! Commits are immutable snapshots of the working directory. They contain:
//! - A commit message
//! - A formatted timestamp (fixed `-0800` display offset)
//! - A uniqueness nonce
//! - A tree: path -> blob object ID, ordered lexicographically by path
//! - An optional parent and, for merge commits, an optional second parent
//!
//! ## Format
//!
//! On disk, a commit is a binary record of length-prefixed fields (see
//! `Packable`). The object ID digests (message, timestamp, nonce, tree,
//! parent); the second parent is not part of the digest. The nonce makes two
//! otherwise identical commits hash differently, and round-trips through
//! storage so a re-read commit reproduces its ID.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, sha1_hex};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Context;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use chrono::{FixedOffset, TimeZone, Utc};
use fake::rand;
use std::collections::BTreeMap;
use std::io::{BufRead, Read, Write};

/// Timestamp string of the initial commit (the Unix epoch)
pub const EPOCH_TIMESTAMP: &str = "Thu Jan 01 00:00:00 1970";

/// Fixed offset appended whenever a timestamp is displayed
pub const DISPLAY_OFFSET: &str = "-0800";

/// Timestamp rendering: weekday, month, zero-padded day, time, year
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Render the current wall-clock time in the commit timestamp format,
/// shifted to the fixed `-0800` offset.
pub fn timestamp_now() -> String {
    let offset = FixedOffset::west_opt(8 * 3600).expect("valid fixed offset");
    Utc::now()
        .with_timezone(&offset)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Render the Unix epoch in the commit timestamp format (UTC)
fn epoch_timestamp() -> String {
    Utc.timestamp_opt(0, 0)
        .single()
        .expect("epoch is representable")
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Slim projection of a commit
///
/// Carries only what graph traversals need: the commit's ID and its parent
/// IDs, first parent before second parent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

/// Gitlet commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message
    message: String,
    /// Formatted creation time (without the display offset)
    timestamp: String,
    /// Uniqueness nonce; distinguishes re-creations with identical metadata
    nonce: u64,
    /// Snapshot: path -> blob object ID, lexicographic by path
    tree: BTreeMap<String, ObjectId>,
    /// First parent (absent only for the initial commit)
    parent: Option<ObjectId>,
    /// Second parent (present iff this is a merge commit)
    second_parent: Option<ObjectId>,
}

impl Commit {
    /// Create a new commit stamped with the current wall-clock time
    pub fn new(
        message: String,
        tree: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
        second_parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            message,
            timestamp: timestamp_now(),
            nonce: rand::random::<u64>(),
            tree,
            parent,
            second_parent,
        }
    }

    /// The initial commit: empty tree, no parents, epoch timestamp
    ///
    /// The nonce is fixed so every repository shares the same root commit
    /// id, which is what lets unrelated repositories push and fetch to each
    /// other.
    pub fn initial() -> Self {
        Commit {
            message: "initial commit".to_string(),
            timestamp: epoch_timestamp(),
            nonce: 0,
            tree: BTreeMap::new(),
            parent: None,
            second_parent: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }

    /// Look up the blob recorded for a path, if any
    pub fn blob_for(&self, path: &str) -> Option<&ObjectId> {
        self.tree.get(path)
    }

    pub fn tracks(&self, path: &str) -> bool {
        self.tree.contains_key(path)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.second_parent.as_ref()
    }

    pub fn is_merge(&self) -> bool {
        self.second_parent.is_some()
    }

    /// Both parents, first parent before second parent
    pub fn parents(&self) -> Vec<ObjectId> {
        self.parent
            .iter()
            .chain(self.second_parent.iter())
            .cloned()
            .collect()
    }

    /// Slim projection for graph traversals
    pub fn to_slim(&self) -> anyhow::Result<SlimCommit> {
        Ok(SlimCommit {
            oid: self.object_id()?,
            parents: self.parents(),
        })
    }

    /// Encode the fields the object ID covers: message, timestamp, nonce,
    /// tree, first parent. The second parent is excluded.
    fn write_digest_fields<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        write_string(writer, &self.message)?;
        write_string(writer, &self.timestamp)?;
        writer.write_u64::<BigEndian>(self.nonce)?;

        writer.write_u32::<BigEndian>(self.tree.len() as u32)?;
        for (path, oid) in &self.tree {
            write_string(writer, path)?;
            oid.write_h40_to(writer)?;
        }

        write_optional_oid(writer, self.parent.as_ref())?;

        Ok(())
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut record = Vec::new();
        self.write_digest_fields(&mut record)?;
        write_optional_oid(&mut record, self.second_parent.as_ref())?;

        Ok(Bytes::from(record))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let message = read_string(&mut reader).context("Invalid commit record: message")?;
        let timestamp = read_string(&mut reader).context("Invalid commit record: timestamp")?;
        let nonce = reader
            .read_u64::<BigEndian>()
            .context("Invalid commit record: nonce")?;

        let entry_count = reader
            .read_u32::<BigEndian>()
            .context("Invalid commit record: tree size")?;
        let mut tree = BTreeMap::new();
        for _ in 0..entry_count {
            let path = read_string(&mut reader).context("Invalid commit record: tree path")?;
            let oid = ObjectId::read_h40_from(&mut reader)
                .context("Invalid commit record: tree blob id")?;
            tree.insert(path, oid);
        }

        let parent = read_optional_oid(&mut reader).context("Invalid commit record: parent")?;
        let second_parent =
            read_optional_oid(&mut reader).context("Invalid commit record: second parent")?;

        Ok(Commit {
            message,
            timestamp,
            nonce,
            tree,
            parent,
            second_parent,
        })
    }
}

impl Object for Commit {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        let mut digest_input = Vec::new();
        self.write_digest_fields(&mut digest_input)?;

        ObjectId::try_parse(sha1_hex(&digest_input))
    }
}

fn write_string<W: Write>(writer: &mut W, value: &str) -> anyhow::Result<()> {
    writer.write_u32::<BigEndian>(value.len() as u32)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

fn read_string<R: Read>(reader: &mut R) -> anyhow::Result<String> {
    let len = reader.read_u32::<BigEndian>()? as usize;
    let mut buffer = vec![0u8; len];
    reader.read_exact(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_optional_oid<W: Write>(writer: &mut W, oid: Option<&ObjectId>) -> anyhow::Result<()> {
    match oid {
        Some(oid) => {
            writer.write_u8(1)?;
            oid.write_h40_to(writer)?;
        }
        None => writer.write_u8(0)?,
    }
    Ok(())
}

fn read_optional_oid<R: Read>(reader: &mut R) -> anyhow::Result<Option<ObjectId>> {
    match reader.read_u8()? {
        0 => Ok(None),
        1 => Ok(Some(ObjectId::read_h40_from(reader)?)),
        tag => Err(anyhow::anyhow!("Invalid optional object id tag: {}", tag)),
    }
}
