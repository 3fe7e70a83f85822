//! Branch name handling
//!
//! Branch names are arbitrary non-empty strings without filesystem-hostile
//! characters. Remote-tracking branches use the two-segment form
//! `<remote>/<branch>`; deeper nesting is rejected.

pub mod branch_name;

/// Regex pattern for invalid characters and shapes in branch names
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
