//! Linters for commit messages and branch names

pub mod branch;
pub mod commit;

pub use branch::{lint_branch_name, BranchReport};
pub use commit::{lint_commit_message, strip_git_comments, CommitViolation, LintReport};
