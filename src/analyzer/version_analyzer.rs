use semver::Version;
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::config::ConventionsConfig;
use crate::domain::{initial_version, parse_version_tag, Impact, ParsedCommit};
use crate::error::Result;
use crate::git::{CommitInfo, Repository};

/// Impact of a single commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommitImpact {
    pub summary: String,
    pub impact: Impact,
    /// Whether the message follows the conventional commit grammar
    pub conventional: bool,
}

/// Impacts of a list of commits and their aggregate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    pub commits: Vec<CommitImpact>,
    pub impact: Impact,
}

impl Analysis {
    pub fn count(&self, impact: Impact) -> usize {
        self.commits.iter().filter(|c| c.impact == impact).count()
    }
}

/// Everything needed to decide the next release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub latest_tag: Option<String>,
    pub current_version: Option<Version>,
    pub commits: Vec<CommitInfo>,
    pub analysis: Analysis,
    pub next_version: Version,
    pub warnings: Vec<BoundaryWarning>,
}

impl ReleasePlan {
    /// True when the next version differs from the current one
    pub fn has_release(&self) -> bool {
        self.current_version.as_ref() != Some(&self.next_version)
    }
}

/// Analyzes commits to determine the semantic version impact
pub struct VersionAnalyzer {
    config: ConventionsConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: ConventionsConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Impact of one message; non-conventional messages have none
    pub fn analyze_message(&self, message: &str) -> CommitImpact {
        let summary = message.lines().next().unwrap_or("").to_string();
        match ParsedCommit::parse_with(message, &self.config.breaking_change_indicators) {
            Ok(parsed) => CommitImpact {
                summary,
                impact: parsed.impact(),
                conventional: parsed.commit_tag().is_some(),
            },
            Err(_) => CommitImpact {
                summary,
                impact: Impact::None,
                conventional: false,
            },
        }
    }

    /// Analyze commit messages: breaking beats feat, feat beats fix/perf, the rest is none
    pub fn analyze_messages<S: AsRef<str>>(&self, messages: &[S]) -> Analysis {
        let commits: Vec<CommitImpact> = messages
            .iter()
            .map(|m| self.analyze_message(m.as_ref()))
            .collect();

        let impact = commits
            .iter()
            .map(|c| c.impact)
            .max()
            .unwrap_or(Impact::None);

        Analysis { commits, impact }
    }

    /// Latest version tag by semantic version ordering, with warnings for
    /// version-like tags that fail to parse
    pub fn latest_version_tag<R: Repository>(
        &self,
        repo: &R,
    ) -> Result<(Option<(String, Version)>, Vec<BoundaryWarning>)> {
        let mut warnings = Vec::new();
        let mut latest: Option<(String, Version)> = None;

        for tag in repo.list_tags()? {
            match parse_version_tag(&tag) {
                Ok(version) => {
                    if latest.as_ref().map_or(true, |(_, v)| version > *v) {
                        latest = Some((tag, version));
                    }
                }
                Err(_) => {
                    if looks_like_version(&tag) {
                        warnings.push(BoundaryWarning::UnparsableTag { tag });
                    }
                }
            }
        }

        Ok((latest, warnings))
    }

    /// Analyze the commits since the latest version tag and plan the next version
    pub fn analyze_repository<R: Repository>(&self, repo: &R) -> Result<ReleasePlan> {
        let (latest, mut warnings) = self.latest_version_tag(repo)?;
        let head = repo.head_oid()?;

        let (latest_tag, current_version, from_oid) = match latest {
            Some((tag, version)) => {
                let oid = repo.find_tag_oid(&tag)?;
                (Some(tag), Some(version), oid)
            }
            None => {
                warnings.push(BoundaryWarning::NoVersionTag);
                (None, None, None)
            }
        };

        let commits = repo.get_commits_between(from_oid, head)?;
        debug!(
            tag = latest_tag.as_deref().unwrap_or("<none>"),
            count = commits.len(),
            "collected commits since latest tag"
        );

        let messages: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
        let analysis = self.analyze_messages(&messages[..]);

        if let Some(tag) = &latest_tag {
            if commits.is_empty() {
                warnings.push(BoundaryWarning::NoNewCommits {
                    latest_tag: tag.clone(),
                    current_commit_hash: head.to_string(),
                });
            } else if analysis.impact == Impact::None {
                warnings.push(BoundaryWarning::NoReleaseImpact {
                    commit_count: commits.len(),
                });
            }
        }

        let next_version = match &current_version {
            Some(current) => analysis.impact.apply(current),
            None => initial_version(),
        };

        Ok(ReleasePlan {
            latest_tag,
            current_version,
            commits,
            analysis,
            next_version,
            warnings,
        })
    }
}

fn looks_like_version(tag: &str) -> bool {
    let rest = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}
