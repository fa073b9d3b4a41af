use std::sync::LazyLock;

use regex::Regex;

use crate::domain::tag::CommitTag;
use crate::domain::version::Impact;

/// Indicators recognised at the start of a body or footer line
pub const DEFAULT_BREAKING_INDICATORS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

// <tag>[(<scope>)][!]: <description>
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(?:\(([^()]*)\))?(!)?:(?: (.*))?$").expect("header regex is valid")
});

static FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(BREAKING CHANGE|[A-Za-z][A-Za-z-]*)(?:: | #)(.*)$")
        .expect("footer regex is valid")
});

/// A trailer line such as `Refs: #42` or `BREAKING CHANGE: ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub token: String,
    pub value: String,
}

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// Tag keyword exactly as written in the header
    pub tag: String,
    pub scope: Option<String>,
    pub description: String,
    pub body: Option<String>,
    pub footers: Vec<Footer>,
    /// `!` marker in the header
    pub breaking_marker: bool,
    pub is_breaking_change: bool,
}

/// The first line of a message does not follow `<tag>[(<scope>)][!]: <description>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedHeader(pub String);

impl std::fmt::Display for MalformedHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "header '{}' does not match '<tag>[(<scope>)][!]: <description>'",
            self.0
        )
    }
}

impl std::error::Error for MalformedHeader {}

impl ParsedCommit {
    /// Parse a commit message with the default breaking-change indicators
    pub fn parse(message: &str) -> Result<Self, MalformedHeader> {
        Self::parse_with(message, &DEFAULT_BREAKING_INDICATORS)
    }

    /// Parse a commit message according to the conventional commits grammar.
    ///
    /// Supports:
    /// - `type(scope)!: description`
    /// - `type(scope): description`
    /// - `type!: description`
    /// - `type: description`
    ///
    /// The rest of the message is split into an optional body and trailing footers.
    pub fn parse_with<S: AsRef<str>>(
        message: &str,
        breaking_indicators: &[S],
    ) -> Result<Self, MalformedHeader> {
        let message = message.trim_start_matches(['\n', '\r']);
        let mut lines = message.lines();
        let header = lines.next().unwrap_or("").trim_end();

        let captures = HEADER_RE
            .captures(header)
            .ok_or_else(|| MalformedHeader(header.to_string()))?;

        let tag = captures[1].to_string();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let breaking_marker = captures.get(3).is_some();
        let description = captures
            .get(4)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let rest: Vec<&str> = lines.collect();
        let rest_text = rest.join("\n");
        let rest_text = rest_text.trim();

        let (body, footers) = split_body_and_footers(rest_text);

        let breaking_in_text = rest.iter().any(|line| {
            breaking_indicators
                .iter()
                .any(|indicator| line.trim_start().starts_with(indicator.as_ref()))
        });

        Ok(ParsedCommit {
            tag,
            scope,
            description,
            body,
            footers,
            breaking_marker,
            is_breaking_change: breaking_marker || breaking_in_text,
        })
    }

    /// The tag as one of the known values, if it is one
    pub fn commit_tag(&self) -> Option<CommitTag> {
        self.tag.parse().ok()
    }

    /// Version impact of this commit: major when breaking, the tag's default otherwise
    pub fn impact(&self) -> Impact {
        if self.is_breaking_change {
            return Impact::Major;
        }
        self.commit_tag().map(|t| t.impact()).unwrap_or(Impact::None)
    }
}

fn split_body_and_footers(text: &str) -> (Option<String>, Vec<Footer>) {
    if text.is_empty() {
        return (None, Vec::new());
    }

    let paragraphs: Vec<&str> = text.split("\n\n").collect();
    let last = paragraphs[paragraphs.len() - 1];

    let footers: Option<Vec<Footer>> = last
        .lines()
        .map(|line| {
            FOOTER_RE.captures(line).map(|c| Footer {
                token: c[1].to_string(),
                value: c[2].trim().to_string(),
            })
        })
        .collect();

    match footers {
        Some(footers) if !footers.is_empty() => {
            let body = paragraphs[..paragraphs.len() - 1].join("\n\n");
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.trim().to_string())
            };
            (body, footers)
        }
        _ => (Some(text.to_string()), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let commit = ParsedCommit::parse("feat(auth): add login").unwrap();
        assert_eq!(commit.tag, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert_eq!(commit.description, "add login");
        assert!(!commit.is_breaking_change);
        assert_eq!(commit.impact(), Impact::Minor);
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = ParsedCommit::parse("fix(auth)!: drop legacy tokens").unwrap();
        assert!(commit.breaking_marker);
        assert!(commit.is_breaking_change);
        assert_eq!(commit.impact(), Impact::Major);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = ParsedCommit::parse("refactor!: rename config keys").unwrap();
        assert_eq!(commit.scope, None);
        assert_eq!(commit.impact(), Impact::Major);
    }

    #[test]
    fn test_parse_non_conventional() {
        assert!(ParsedCommit::parse("Random commit message").is_err());
        assert!(ParsedCommit::parse("feat:no space").is_err());
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let commit =
            ParsedCommit::parse("fix: handle empty input\n\nBREAKING CHANGE: input is required")
                .unwrap();
        assert!(commit.is_breaking_change);
        assert!(!commit.breaking_marker);
        assert_eq!(commit.footers.len(), 1);
        assert_eq!(commit.footers[0].token, "BREAKING CHANGE");
        assert_eq!(commit.footers[0].value, "input is required");
        assert_eq!(commit.body, None);
    }

    #[test]
    fn test_parse_body_and_footers() {
        let message = "docs(readme): describe install\n\nExplain cargo install.\n\nRefs: #12\nReviewed-by: Sam";
        let commit = ParsedCommit::parse(message).unwrap();
        assert_eq!(commit.body.as_deref(), Some("Explain cargo install."));
        assert_eq!(commit.footers.len(), 2);
        assert_eq!(commit.footers[1].token, "Reviewed-by");
        assert_eq!(commit.impact(), Impact::None);
    }

    #[test]
    fn test_parse_body_without_footers() {
        let commit = ParsedCommit::parse("chore: tidy\n\njust some words").unwrap();
        assert_eq!(commit.body.as_deref(), Some("just some words"));
        assert!(commit.footers.is_empty());
    }

    #[test]
    fn test_custom_breaking_indicator() {
        let message = "feat: new api\n\nBREAKS: everything";
        assert!(!ParsedCommit::parse(message).unwrap().is_breaking_change);
        assert!(
            ParsedCommit::parse_with(message, &["BREAKS:"])
                .unwrap()
                .is_breaking_change
        );
    }

    #[test]
    fn test_unknown_tag_parses_without_impact() {
        let commit = ParsedCommit::parse("feature: add thing").unwrap();
        assert_eq!(commit.commit_tag(), None);
        assert_eq!(commit.impact(), Impact::None);
    }

    #[test]
    fn test_empty_description_still_parses() {
        let commit = ParsedCommit::parse("fix:").unwrap();
        assert_eq!(commit.description, "");
        let commit = ParsedCommit::parse("fix(): ").unwrap();
        assert_eq!(commit.scope.as_deref(), Some(""));
    }
}
