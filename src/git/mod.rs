//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations scaffold-kit needs, so the release analysis can run against a
//! real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

impl CommitInfo {
    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Common git operation trait for abstraction
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to [crate::error::ScaffoldKitError].
pub trait Repository: Send + Sync {
    /// Name of the checked-out branch.
    ///
    /// Fails when HEAD is detached or unborn.
    fn current_branch(&self) -> Result<String>;

    /// OID of the commit HEAD points to
    fn head_oid(&self) -> Result<Oid>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Find a tag by name and return the OID of the commit it points to.
    ///
    /// Handles both lightweight and annotated tags. Returns `Ok(None)` when the
    /// tag doesn't exist.
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Get commits reachable from `to_oid` but not from `from_oid`.
    ///
    /// Commits are returned oldest first. With `from_oid == None` the whole
    /// history of `to_oid` is returned.
    fn get_commits_between(&self, from_oid: Option<Oid>, to_oid: Oid) -> Result<Vec<CommitInfo>>;
}
