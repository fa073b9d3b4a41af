use std::fmt;
use std::str::FromStr;

use crate::domain::version::Impact;

/// One of the ten conventional commit tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitTag {
    Feat,
    Fix,
    Perf,
    Build,
    Chore,
    Ci,
    Docs,
    Refactor,
    Style,
    Test,
}

impl CommitTag {
    /// All tags, in the order of the conventions table
    pub const ALL: [CommitTag; 10] = [
        CommitTag::Feat,
        CommitTag::Fix,
        CommitTag::Perf,
        CommitTag::Build,
        CommitTag::Chore,
        CommitTag::Ci,
        CommitTag::Docs,
        CommitTag::Refactor,
        CommitTag::Style,
        CommitTag::Test,
    ];

    /// The lowercase keyword used in commit headers and branch names
    pub fn keyword(&self) -> &'static str {
        match self {
            CommitTag::Feat => "feat",
            CommitTag::Fix => "fix",
            CommitTag::Perf => "perf",
            CommitTag::Build => "build",
            CommitTag::Chore => "chore",
            CommitTag::Ci => "ci",
            CommitTag::Docs => "docs",
            CommitTag::Refactor => "refactor",
            CommitTag::Style => "style",
            CommitTag::Test => "test",
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            CommitTag::Feat => "new or changed feature",
            CommitTag::Fix => "bug fix",
            CommitTag::Perf => "performance improvement",
            CommitTag::Build => "build system or dependency change",
            CommitTag::Chore => "maintenance with no production code change",
            CommitTag::Ci => "continuous integration change",
            CommitTag::Docs => "documentation only",
            CommitTag::Refactor => "code change that neither fixes nor adds",
            CommitTag::Style => "formatting, whitespace, no logic change",
            CommitTag::Test => "adding or correcting tests",
        }
    }

    /// Version impact of a non-breaking commit with this tag
    pub fn impact(&self) -> Impact {
        match self {
            CommitTag::Feat => Impact::Minor,
            CommitTag::Fix | CommitTag::Perf => Impact::Patch,
            _ => Impact::None,
        }
    }
}

impl fmt::Display for CommitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when a keyword is not one of the known tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown commit tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for CommitTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.keyword() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
