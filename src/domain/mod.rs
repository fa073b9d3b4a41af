//! Domain logic - the commit and branch conventions, independent of git and the filesystem

pub mod branch;
pub mod commit;
pub mod tag;
pub mod version;

pub use branch::{BranchName, BranchViolation};
pub use commit::{Footer, MalformedHeader, ParsedCommit, DEFAULT_BREAKING_INDICATORS};
pub use tag::{CommitTag, UnknownTag};
pub use version::{initial_version, parse_version_tag, Impact};
