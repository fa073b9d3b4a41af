use std::fmt;

/// Non-fatal conditions met while analysing a repository for a release.
/// These should be reported to the user but do not stop the command.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest version tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Commits exist, but none of them warrants a release
    NoReleaseImpact { commit_count: usize },
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String },
    /// Repository has no version tag yet
    NoVersionTag,
    /// Ignore file could not be found; nothing is ignored
    MissingIgnoreFile { path: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = current_commit_hash
                    .get(..7)
                    .unwrap_or(current_commit_hash.as_str());
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::NoReleaseImpact { commit_count } => write!(
                f,
                "{} commit(s) found, none of them feat, fix, perf or breaking",
                commit_count
            ),
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Ignoring tag '{}': not a MAJOR.MINOR.PATCH version", tag)
            }
            BoundaryWarning::NoVersionTag => {
                write!(f, "No version tag found; starting from the initial version")
            }
            BoundaryWarning::MissingIgnoreFile { path } => {
                write!(f, "Ignore file '{}' not found; nothing will be ignored", path)
            }
        }
    }
}
