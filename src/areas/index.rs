//! Staging area (the index)
//!
//! The index tracks the changes that will go into the next commit: an
//! ordered map of staged additions (path -> blob id) and a set of staged
//! removals. The two sides are kept disjoint at all times.
//!
//! ## Index File Format
//!
//! One binary record at `.gitlet/index`:
//! - Header: signature, version, addition and removal counts
//! - Additions: length-prefixed path + 20-byte blob id each
//! - Removals: length-prefixed path each
//! - Checksum: SHA-1 of the entire record for integrity verification

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use byteorder::{BigEndian, ByteOrder};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::Path;

/// Staging area
///
/// Persisted to disk as a single checksummed record; `rehydrate` loads it
/// and `write_updates` stores it, both under file locks.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    /// Staged additions: path -> blob id, lexicographic by path
    additions: BTreeMap<String, ObjectId>,
    /// Staged removals
    removals: BTreeSet<String>,
    /// Flag indicating the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn reset(&mut self) {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// Reads the record, verifies its checksum, and replaces the in-memory
    /// state. A missing or empty file yields an empty staging area.
    ///
    /// ## Locking
    ///
    /// Holds a shared lock on the index file while reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path().exists() {
            self.reset();
            std::fs::File::create(self.path())?;
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        self.reset();

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let (addition_count, removal_count) = self.parse_header(&mut reader)?;

        for _ in 0..addition_count {
            let path = Self::read_path(&mut reader)?;
            let oid_bytes = reader.read(20)?;
            let oid = ObjectId::read_h40_from(&mut oid_bytes.as_ref())?;
            self.additions.insert(path, oid);
        }

        for _ in 0..removal_count {
            let path = Self::read_path(&mut reader)?;
            self.removals.insert(path);
        }

        reader.verify()
    }

    fn parse_header(&self, reader: &mut Checksum) -> anyhow::Result<(u32, u32)> {
        let header = reader.read(HEADER_SIZE)?;

        if &header[..4] != SIGNATURE.as_bytes() {
            return Err(anyhow!("Invalid index file signature"));
        }

        let version = BigEndian::read_u32(&header[4..8]);
        if version != VERSION {
            return Err(anyhow!("Unsupported index file version: {}", version));
        }

        let addition_count = BigEndian::read_u32(&header[8..12]);
        let removal_count = BigEndian::read_u32(&header[12..16]);

        Ok((addition_count, removal_count))
    }

    fn read_path(reader: &mut Checksum) -> anyhow::Result<String> {
        let len_bytes = reader.read(4)?;
        let len = BigEndian::read_u32(&len_bytes) as usize;
        let path_bytes = reader.read(len)?;

        Ok(String::from_utf8(path_bytes.to_vec())?)
    }

    /// Persist the index as one record
    ///
    /// ## Locking
    ///
    /// Holds an exclusive lock on the index file while writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(SIGNATURE.as_bytes());
        BigEndian::write_u32(&mut header[4..8], VERSION);
        BigEndian::write_u32(&mut header[8..12], self.additions.len() as u32);
        BigEndian::write_u32(&mut header[12..16], self.removals.len() as u32);
        writer.write(&header)?;

        for (path, oid) in &self.additions {
            Self::write_path(&mut writer, path)?;
            let mut oid_bytes = Vec::with_capacity(20);
            oid.write_h40_to(&mut oid_bytes)?;
            writer.write(&oid_bytes)?;
        }

        for path in &self.removals {
            Self::write_path(&mut writer, path)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        Ok(())
    }

    fn write_path(writer: &mut Checksum, path: &str) -> anyhow::Result<()> {
        let mut len_bytes = [0u8; 4];
        BigEndian::write_u32(&mut len_bytes, path.len() as u32);
        writer.write(&len_bytes)?;
        writer.write(path.as_bytes())?;
        Ok(())
    }

    /// Stage a path for addition
    ///
    /// A path currently staged for removal is only unstaged from removal;
    /// otherwise the addition entry is added or overwritten. A path is never
    /// on both sides at once.
    pub fn stage_add(&mut self, path: &str, oid: ObjectId) {
        if self.removals.remove(path) {
            self.changed = true;
            return;
        }

        self.additions.insert(path.to_string(), oid);
        self.changed = true;
    }

    /// Stage a path for removal, dropping any staged addition for it
    pub fn stage_rm(&mut self, path: &str) {
        self.additions.remove(path);
        self.removals.insert(path.to_string());
        self.changed = true;
    }

    pub fn unstage_add(&mut self, path: &str) {
        if self.additions.remove(path).is_some() {
            self.changed = true;
        }
    }

    pub fn unstage_rm(&mut self, path: &str) {
        if self.removals.remove(path) {
            self.changed = true;
        }
    }

    /// Drop every staged entry
    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn contains_add(&self, path: &str) -> bool {
        self.additions.contains_key(path)
    }

    pub fn contains_rm(&self, path: &str) -> bool {
        self.removals.contains(path)
    }

    pub fn addition_oid(&self, path: &str) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    /// Staged additions in lexicographic path order
    pub fn additions(&self) -> &BTreeMap<String, ObjectId> {
        &self.additions
    }

    /// Staged removals in lexicographic path order
    pub fn removals(&self) -> &BTreeSet<String> {
        &self.removals
    }
}
