//! Split point search for merge operations
//!
//! The split point of a merge is the latest common ancestor of the two branch
//! heads. "Latest" is defined by distance from the current head: every
//! ancestor of the head is assigned its minimum distance following both
//! parent edges, and among the other branch's ancestors that appear in that
//! distance map, the one with the smallest distance wins.
//!
//! ## Algorithm
//!
//! 1. Breadth-first traversal from the head over `parent` and
//!    `second_parent` edges, recording each ancestor's minimum distance.
//! 2. Depth-first traversal from the other head, visiting `parent` before
//!    `second_parent`. Every visited commit found in the distance map is a
//!    candidate; a candidate replaces the current best only when its distance
//!    is strictly smaller, so ties keep the first commit encountered in the
//!    traversal.
//!
//! Both passes memoize visited commits, keeping the search linear in the
//! number of reachable commits even on diamond-heavy histories.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_merge` to trace the distance map and the
//! candidate selection on stderr.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Macro for debug logging, enabled with the debug_merge feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Finds the split point between two commits
///
/// Generic over a loader function so it can be driven by the on-disk commit
/// store in production and by an in-memory store in tests.
pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> SlimCommit,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> SlimCommit,
{
    /// Create a finder over the given commit loader
    ///
    /// The loader takes a commit id and returns its `SlimCommit` projection;
    /// root commits return an empty parent list.
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find the split point between `head` and `other`
    ///
    /// Returns `None` only when the two commits share no ancestry, which a
    /// single-rooted repository never produces.
    pub fn find_split_point(&self, head: &ObjectId, other: &ObjectId) -> Option<ObjectId> {
        let distances = self.distances_from(head);

        debug_log!(
            "Distance map from {}: {}",
            head,
            {
                let mut entries = distances
                    .iter()
                    .map(|(oid, distance)| format!("{}={}", oid, distance))
                    .collect::<Vec<_>>();
                entries.sort();
                entries.join(", ")
            }
        );

        let mut best: Option<(u32, ObjectId)> = None;
        let mut visited = HashSet::new();
        let mut stack = vec![other.clone()];

        while let Some(commit_id) = stack.pop() {
            if !visited.insert(commit_id.clone()) {
                continue;
            }

            if let Some(&distance) = distances.get(&commit_id) {
                let improves = match &best {
                    None => true,
                    Some((best_distance, _)) => distance < *best_distance,
                };
                if improves {
                    debug_log!("Candidate {} at distance {}", commit_id, distance);
                    best = Some((distance, commit_id.clone()));
                }
            }

            let commit = (self.commit_loader)(&commit_id);
            // Parents are pushed in reverse so the first parent pops first
            for parent in commit.parents.iter().rev() {
                if !visited.contains(parent) {
                    stack.push(parent.clone());
                }
            }
        }

        debug_log!(
            "Split point of {} and {}: {:?}",
            head,
            other,
            best.as_ref().map(|(_, oid)| oid.as_ref())
        );

        best.map(|(_, oid)| oid)
    }

    /// Minimum distance from `head` to each of its ancestors, following both
    /// parent edges
    fn distances_from(&self, head: &ObjectId) -> HashMap<ObjectId, u32> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();

        distances.insert(head.clone(), 0);
        queue.push_back(head.clone());

        while let Some(commit_id) = queue.pop_front() {
            let distance = distances[&commit_id];
            let commit = (self.commit_loader)(&commit_id);

            for parent in &commit.parents {
                if !distances.contains_key(parent) {
                    distances.insert(parent.clone(), distance + 1);
                    queue.push_back(parent.clone());
                }
            }
        }

        distances
    }
}
