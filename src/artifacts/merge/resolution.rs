//! Per-file three-way classification
//!
//! For every path appearing in any of the split point, the current head, or
//! the merged-in head, the trees give three optional blob ids. Comparing them
//! decides what the merge does with that path.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::{BufMut, Bytes, BytesMut};

/// What the merge does with one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Keep the current branch's version (possibly: keep it absent)
    KeepCurrent,
    /// Write the given branch's blob and stage it
    TakeOther(ObjectId),
    /// Stage the path for removal and delete the working file
    Remove,
    /// Both sides changed it in different ways; write conflict markers
    Conflict,
}

/// Classify one path across (split, head, other)
///
/// The rules reduce to: an unchanged side yields to the changed side, and two
/// sides that changed differently conflict.
pub fn classify(
    split: Option<&ObjectId>,
    head: Option<&ObjectId>,
    other: Option<&ObjectId>,
) -> MergeAction {
    if head == other {
        // Same blob on both sides, or absent from both
        return MergeAction::KeepCurrent;
    }

    if split == head {
        // Unmodified on our side; the other side decides
        return match other {
            Some(oid) => MergeAction::TakeOther(oid.clone()),
            None => MergeAction::Remove,
        };
    }

    if split == other {
        // Unmodified on their side; our version stands
        return MergeAction::KeepCurrent;
    }

    MergeAction::Conflict
}

/// Render the conflict-marker file contents for a path
///
/// An absent side contributes no bytes between its markers.
pub fn conflict_bytes(head_content: Option<&Bytes>, other_content: Option<&Bytes>) -> Bytes {
    let mut rendered = BytesMut::new();

    rendered.put_slice(b"<<<<<<< HEAD\n");
    if let Some(content) = head_content {
        rendered.put_slice(content);
    }
    rendered.put_slice(b"=======\n");
    if let Some(content) = other_content {
        rendered.put_slice(content);
    }
    rendered.put_slice(b">>>>>>>\n");

    rendered.freeze()
}
