use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Copy a commit closure between object stores
///
/// Walks the ancestry of `tip` in the source store, following first and
/// second parents, and copies every commit the destination lacks together
/// with the blobs its tree references. The walk prunes at commits the
/// destination already has; their ancestries are complete by the store
/// invariant that parents are written before children are referenced.
pub(super) fn copy_objects(
    source: &Repository,
    destination: &Repository,
    tip: &ObjectId,
) -> anyhow::Result<()> {
    let mut stack = vec![tip.clone()];
    let mut visited = HashSet::new();

    while let Some(oid) = stack.pop() {
        if !visited.insert(oid.clone()) {
            continue;
        }

        if destination.database().contains_commit(&oid) {
            continue;
        }

        let commit = source.database().load_commit(&oid)?;

        for blob_oid in commit.tree().values() {
            if !destination.database().contains_blob(blob_oid) {
                let blob = source.database().load_blob(blob_oid)?;
                destination.database().store(&blob)?;
            }
        }

        destination.database().store(&commit)?;

        for parent in commit.parents() {
            stack.push(parent);
        }
    }

    Ok(())
}

/// Open the repository a remote record points at
///
/// Fails when the record or the remote's repository directory is missing.
pub(super) fn open_remote(repository: &Repository, name: &str) -> anyhow::Result<Repository> {
    use crate::areas::repository::GITLET_DIR;
    use crate::artifacts::core::diagnostic::Diagnostic;

    let remote_path = repository
        .remotes()
        .read(name)?
        .ok_or(Diagnostic::RemoteUnreachable)?;

    if !remote_path.join(GITLET_DIR).is_dir() {
        anyhow::bail!(Diagnostic::RemoteUnreachable);
    }

    Repository::new(remote_path, Box::new(std::io::sink()))
}
