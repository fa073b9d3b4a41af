use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::domain::tag::CommitTag;

// <tag>[(<scope>)][!]/<description>
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(?:\(([^()]*)\))?(!)?/(.*)$").expect("topic regex is valid")
});

static KEBAB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab regex is valid"));

static RELEASE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("release regex is valid")
});

/// A branch name classified against the naming conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchName {
    /// Long-lived branch such as `main` or `develop`
    Protected(String),
    /// `release/<MAJOR.MINOR.PATCH>`
    Release(Version),
    /// `<tag>[(<scope>)][!]/<description>`
    Topic {
        tag: CommitTag,
        scope: Option<String>,
        breaking: bool,
        description: String,
    },
}

/// Reasons a branch name breaks the naming conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchViolation {
    Empty,
    MissingTag(String),
    UnknownTag(String),
    InvalidScope(String),
    EmptyDescription,
    NotKebabCase(String),
    InvalidReleaseVersion(String),
}

impl fmt::Display for BranchViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchViolation::Empty => write!(f, "branch name is empty"),
            BranchViolation::MissingTag(name) => write!(
                f,
                "branch '{}' must look like '<tag>/<description>' or 'release/<MAJOR.MINOR.PATCH>'",
                name
            ),
            BranchViolation::UnknownTag(tag) => write!(
                f,
                "unknown tag '{}' (expected one of: {})",
                tag,
                CommitTag::ALL
                    .iter()
                    .map(|t| t.keyword())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            BranchViolation::InvalidScope(scope) => {
                write!(f, "scope '{}' must be a non-empty kebab-case word", scope)
            }
            BranchViolation::EmptyDescription => write!(f, "branch description is empty"),
            BranchViolation::NotKebabCase(desc) => write!(
                f,
                "description '{}' must be kebab-case (lowercase letters, digits and single hyphens)",
                desc
            ),
            BranchViolation::InvalidReleaseVersion(v) => write!(
                f,
                "release version '{}' must be MAJOR.MINOR.PATCH",
                v
            ),
        }
    }
}

impl BranchName {
    /// Classify a branch name, collecting every violation found
    pub fn parse<S: AsRef<str>>(name: &str, protected: &[S]) -> Result<Self, Vec<BranchViolation>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(vec![BranchViolation::Empty]);
        }

        if protected.iter().any(|p| p.as_ref() == name) {
            return Ok(BranchName::Protected(name.to_string()));
        }

        if let Some(version) = name.strip_prefix("release/") {
            return parse_release(version);
        }

        let captures = TOPIC_RE
            .captures(name)
            .ok_or_else(|| vec![BranchViolation::MissingTag(name.to_string())])?;

        let mut violations = Vec::new();

        let tag = match captures[1].parse::<CommitTag>() {
            Ok(tag) => Some(tag),
            Err(e) => {
                violations.push(BranchViolation::UnknownTag(e.0));
                None
            }
        };

        let scope = captures.get(2).map(|m| m.as_str().to_string());
        if let Some(scope) = &scope {
            if !KEBAB_RE.is_match(scope) {
                violations.push(BranchViolation::InvalidScope(scope.clone()));
            }
        }

        let breaking = captures.get(3).is_some();
        let description = captures[4].to_string();
        if description.is_empty() {
            violations.push(BranchViolation::EmptyDescription);
        } else if !KEBAB_RE.is_match(&description) {
            violations.push(BranchViolation::NotKebabCase(description.clone()));
        }

        match tag {
            Some(tag) if violations.is_empty() => Ok(BranchName::Topic {
                tag,
                scope,
                breaking,
                description,
            }),
            _ => Err(violations),
        }
    }

    /// Short label for the kind of branch
    pub fn kind(&self) -> &'static str {
        match self {
            BranchName::Protected(_) => "protected",
            BranchName::Release(_) => "release",
            BranchName::Topic { .. } => "topic",
        }
    }
}

fn parse_release(version: &str) -> Result<BranchName, Vec<BranchViolation>> {
    if !RELEASE_VERSION_RE.is_match(version) {
        return Err(vec![BranchViolation::InvalidReleaseVersion(
            version.to_string(),
        )]);
    }

    Version::parse(version)
        .map(BranchName::Release)
        .map_err(|_| vec![BranchViolation::InvalidReleaseVersion(version.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [&str; 3] = ["main", "master", "develop"];

    #[test]
    fn test_protected_branches() {
        for name in PROTECTED {
            assert_eq!(
                BranchName::parse(name, &PROTECTED).unwrap(),
                BranchName::Protected(name.to_string())
            );
        }
    }

    #[test]
    fn test_topic_branch() {
        let branch = BranchName::parse("feat/add-login-form", &PROTECTED).unwrap();
        assert_eq!(
            branch,
            BranchName::Topic {
                tag: CommitTag::Feat,
                scope: None,
                breaking: false,
                description: "add-login-form".to_string(),
            }
        );
        assert_eq!(branch.kind(), "topic");
    }

    #[test]
    fn test_topic_branch_with_scope_and_marker() {
        let branch = BranchName::parse("fix(api)!/drop-v1-routes", &PROTECTED).unwrap();
        match branch {
            BranchName::Topic {
                tag,
                scope,
                breaking,
                ..
            } => {
                assert_eq!(tag, CommitTag::Fix);
                assert_eq!(scope.as_deref(), Some("api"));
                assert!(breaking);
            }
            other => panic!("expected topic branch, got {:?}", other),
        }
    }

    #[test]
    fn test_release_branch() {
        let branch = BranchName::parse("release/1.4.0", &PROTECTED).unwrap();
        assert_eq!(branch, BranchName::Release(Version::new(1, 4, 0)));
    }

    #[test]
    fn test_release_branch_rejects_partial_versions() {
        for name in ["release/1.4", "release/v1.4.0", "release/1.4.0-rc.1", "release/01.2.3"] {
            let err = BranchName::parse(name, &PROTECTED).unwrap_err();
            assert!(
                matches!(err[0], BranchViolation::InvalidReleaseVersion(_)),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = BranchName::parse("feature/add-login", &PROTECTED).unwrap_err();
        assert_eq!(err, vec![BranchViolation::UnknownTag("feature".to_string())]);
    }

    #[test]
    fn test_not_kebab_case() {
        for desc in ["Add-Login", "add_login", "add--login", "-add", "add-", "add/login"] {
            let name = format!("feat/{}", desc);
            let err = BranchName::parse(&name, &PROTECTED).unwrap_err();
            assert_eq!(err, vec![BranchViolation::NotKebabCase(desc.to_string())]);
        }
    }

    #[test]
    fn test_missing_tag() {
        let err = BranchName::parse("add-login", &PROTECTED).unwrap_err();
        assert_eq!(err, vec![BranchViolation::MissingTag("add-login".to_string())]);
    }

    #[test]
    fn test_collects_multiple_violations() {
        let err = BranchName::parse("Feature(API)/", &PROTECTED).unwrap_err();
        assert_eq!(err.len(), 3);
        assert!(err.contains(&BranchViolation::EmptyDescription));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            BranchName::parse("  ", &PROTECTED).unwrap_err(),
            vec![BranchViolation::Empty]
        );
    }

    #[test]
    fn test_every_tag_is_valid_branch_prefix() {
        for tag in CommitTag::ALL {
            let name = format!("{}/update-something", tag);
            assert!(BranchName::parse(&name, &PROTECTED).is_ok(), "{}", name);
        }
    }
}
