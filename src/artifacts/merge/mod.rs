//! Merge machinery
//!
//! - `split_point`: latest-common-ancestor search over the commit DAG
//! - `resolution`: per-file three-way classification and conflict rendering

pub mod resolution;
pub mod split_point;
