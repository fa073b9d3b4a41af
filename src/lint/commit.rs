use std::fmt;

use tracing::debug;

use crate::config::ConventionsConfig;
use crate::domain::{CommitTag, ParsedCommit};

const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Base verbs recognised by the imperative-mood check
const BASE_VERBS: &[&str] = &[
    "add", "adjust", "align", "allow", "apply", "avoid", "build", "bump", "cache", "call",
    "change", "check", "clean", "close", "configure", "convert", "correct", "create", "delete",
    "deprecate", "disable", "document", "downgrade", "drop", "enable", "ensure", "exclude",
    "export", "expose", "extract", "fix", "format", "generate", "handle", "hide", "implement",
    "import", "improve", "include", "increase", "initialize", "install", "introduce", "limit",
    "load", "log", "make", "mark", "merge", "migrate", "move", "open", "optimize", "parse",
    "pass", "prevent", "print", "raise", "read", "reduce", "refactor", "release", "remove",
    "rename", "render", "replace", "restore", "return", "revert", "run", "set", "show",
    "simplify", "skip", "sort", "split", "start", "stop", "support", "switch", "test", "track",
    "update", "upgrade", "use", "validate", "wrap", "write",
];

/// A single rule broken by a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitViolation {
    Empty,
    MalformedHeader(String),
    UnknownTag(String),
    EmptyScope,
    EmptyDescription,
    DescriptionNotLowercase,
    NotImperative(String),
    HeaderTooLong { length: usize, max: usize },
    MissingBlankLine,
}

impl fmt::Display for CommitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitViolation::Empty => write!(f, "commit message is empty"),
            CommitViolation::MalformedHeader(header) => write!(
                f,
                "header '{}' must match '<tag>[(<scope>)][!]: <description>'",
                header
            ),
            CommitViolation::UnknownTag(tag) => write!(
                f,
                "unknown tag '{}' (expected one of: {})",
                tag,
                CommitTag::ALL
                    .iter()
                    .map(|t| t.keyword())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            CommitViolation::EmptyScope => write!(f, "scope parentheses are empty"),
            CommitViolation::EmptyDescription => write!(f, "description is empty"),
            CommitViolation::DescriptionNotLowercase => {
                write!(f, "description must start with a lowercase letter")
            }
            CommitViolation::NotImperative(word) => write!(
                f,
                "description must use the imperative mood ('{}' is not imperative)",
                word
            ),
            CommitViolation::HeaderTooLong { length, max } => {
                write!(f, "header is {} characters long (max {})", length, max)
            }
            CommitViolation::MissingBlankLine => {
                write!(f, "header and body must be separated by a blank line")
            }
        }
    }
}

/// Outcome of linting one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub header: String,
    pub violations: Vec<CommitViolation>,
    /// Message matched an exempt prefix and was not checked
    pub exempt: bool,
    pub parsed: Option<ParsedCommit>,
}

impl LintReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Removes git comment lines and everything below a scissors line.
pub fn strip_git_comments(message: &str) -> String {
    let mut kept = Vec::new();
    for line in message.lines() {
        if line == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        kept.push(line);
    }
    kept.join("\n").trim().to_string()
}

/// Lint a commit message against the conventional commit rules.
pub fn lint_commit_message(message: &str, config: &ConventionsConfig) -> LintReport {
    let cleaned = strip_git_comments(message);
    let header = cleaned.lines().next().unwrap_or("").trim_end().to_string();

    if cleaned.is_empty() {
        return LintReport {
            header,
            violations: vec![CommitViolation::Empty],
            exempt: false,
            parsed: None,
        };
    }

    if config
        .exempt_prefixes
        .iter()
        .any(|prefix| header.starts_with(prefix.as_str()))
    {
        debug!(header = %header, "commit message is exempt");
        return LintReport {
            header,
            violations: Vec::new(),
            exempt: true,
            parsed: None,
        };
    }

    let mut violations = Vec::new();

    let length = header.chars().count();
    if length > config.max_header_length {
        violations.push(CommitViolation::HeaderTooLong {
            length,
            max: config.max_header_length,
        });
    }

    if cleaned.lines().nth(1).is_some_and(|l| !l.trim().is_empty()) {
        violations.push(CommitViolation::MissingBlankLine);
    }

    let parsed = match ParsedCommit::parse_with(&cleaned, &config.breaking_change_indicators) {
        Ok(parsed) => parsed,
        Err(_) => {
            violations.insert(0, CommitViolation::MalformedHeader(header.clone()));
            return LintReport {
                header,
                violations,
                exempt: false,
                parsed: None,
            };
        }
    };

    let mut header_violations = Vec::new();

    if parsed.commit_tag().is_none() {
        header_violations.push(CommitViolation::UnknownTag(parsed.tag.clone()));
    }

    if parsed.scope.as_deref().is_some_and(|s| s.trim().is_empty()) {
        header_violations.push(CommitViolation::EmptyScope);
    }

    match parsed.description.chars().next() {
        None => header_violations.push(CommitViolation::EmptyDescription),
        Some(first) => {
            if first.is_uppercase() {
                header_violations.push(CommitViolation::DescriptionNotLowercase);
            }
            if let Some(word) = parsed.description.split_whitespace().next() {
                let word = word.trim_matches(|c: char| !c.is_alphabetic());
                if !word.is_empty() && is_inflected_verb(word) {
                    header_violations.push(CommitViolation::NotImperative(word.to_string()));
                }
            }
        }
    }

    header_violations.extend(violations);

    LintReport {
        header,
        violations: header_violations,
        exempt: false,
        parsed: Some(parsed),
    }
}

/// True when `word` is an inflected form of one of [`BASE_VERBS`].
fn is_inflected_verb(word: &str) -> bool {
    let word = word.to_lowercase();
    if !word.is_ascii() || BASE_VERBS.contains(&word.as_str()) {
        return false;
    }
    candidate_stems(&word)
        .iter()
        .any(|stem| BASE_VERBS.contains(&stem.as_str()))
}

fn candidate_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();

    let mut push_with_variants = |stem: &str| {
        stems.push(stem.to_string());
        stems.push(format!("{}e", stem));
        // dropped -> drop, setting -> set
        let bytes = stem.as_bytes();
        if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
            stems.push(stem[..stem.len() - 1].to_string());
        }
    };

    if let Some(stem) = word.strip_suffix("ing") {
        push_with_variants(stem);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        push_with_variants(stem);
    }
    if let Some(stem) = word.strip_suffix("ies") {
        stems.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("ied") {
        stems.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('d') {
        stems.push(stem.to_string());
    }

    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lint(message: &str) -> LintReport {
        lint_commit_message(message, &ConventionsConfig::default())
    }

    #[test]
    fn test_valid_messages() {
        for message in [
            "feat: add login form",
            "fix(parser): handle empty input",
            "perf!: drop the legacy cache",
            "docs(readme): document install steps\n\nLonger explanation here.",
            "chore: bump dependencies\n\nRefs: #42",
        ] {
            let report = lint(message);
            assert!(report.is_ok(), "{}: {:?}", message, report.violations);
        }
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(lint("").violations, vec![CommitViolation::Empty]);
        assert_eq!(
            lint("# only a comment\n").violations,
            vec![CommitViolation::Empty]
        );
    }

    #[test]
    fn test_malformed_header() {
        let report = lint("Added a thing");
        assert_eq!(
            report.violations,
            vec![CommitViolation::MalformedHeader("Added a thing".to_string())]
        );
        assert!(report.parsed.is_none());
    }

    #[test]
    fn test_unknown_tag() {
        let report = lint("feature: add login");
        assert_eq!(
            report.violations,
            vec![CommitViolation::UnknownTag("feature".to_string())]
        );
    }

    #[test]
    fn test_uppercase_tag_is_unknown() {
        let report = lint("Feat: add login");
        assert_eq!(
            report.violations,
            vec![CommitViolation::UnknownTag("Feat".to_string())]
        );
    }

    #[test]
    fn test_empty_scope_and_description() {
        let report = lint("fix():");
        assert_eq!(
            report.violations,
            vec![CommitViolation::EmptyScope, CommitViolation::EmptyDescription]
        );
    }

    #[test]
    fn test_description_not_lowercase() {
        let report = lint("fix: Handle empty input");
        assert_eq!(
            report.violations,
            vec![CommitViolation::DescriptionNotLowercase]
        );
    }

    #[test]
    fn test_not_imperative() {
        for (message, word) in [
            ("fix: fixed the parser", "fixed"),
            ("feat: adds login", "adds"),
            ("feat: adding login", "adding"),
            ("chore: updates deps", "updates"),
            ("refactor: making it simpler", "making"),
            ("fix: dropped stale entries", "dropped"),
            ("fix: applies defaults", "applies"),
            ("chore: used new api", "used"),
            ("fix: added, removed x", "added"),
            ("docs: updated: readme", "updated"),
        ] {
            assert_eq!(
                lint(message).violations,
                vec![CommitViolation::NotImperative(word.to_string())],
                "{}",
                message
            );
        }
    }

    #[test]
    fn test_unknown_words_are_not_flagged() {
        for message in [
            "fix: address review notes",
            "docs: readme tweaks",
            "feat: release notes page",
            "test: cover the ring buffer",
        ] {
            assert!(lint(message).is_ok(), "{}", message);
        }
    }

    #[test]
    fn test_header_too_long() {
        let message = format!("feat: {}", "a".repeat(80));
        let report = lint(&message);
        assert_eq!(
            report.violations,
            vec![CommitViolation::HeaderTooLong {
                length: 86,
                max: 72
            }]
        );
    }

    #[test]
    fn test_missing_blank_line() {
        let report = lint("feat: add login\nbody right below");
        assert_eq!(report.violations, vec![CommitViolation::MissingBlankLine]);
    }

    #[test]
    fn test_exempt_prefixes() {
        let report = lint("Merge branch 'main' into feat/add-login");
        assert!(report.exempt);
        assert!(report.is_ok());

        let report = lint("Revert \"feat: add login\"");
        assert!(report.exempt);
    }

    #[test]
    fn test_git_comments_are_stripped() {
        let message = "feat: add login\n\n# Please enter the commit message\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x";
        let report = lint(message);
        assert!(report.is_ok(), "{:?}", report.violations);
        assert_eq!(strip_git_comments(message), "feat: add login");
    }

    #[test]
    fn test_custom_max_length() {
        let config = ConventionsConfig {
            max_header_length: 10,
            ..ConventionsConfig::default()
        };
        let report = lint_commit_message("feat: add login", &config);
        assert_eq!(
            report.violations,
            vec![CommitViolation::HeaderTooLong { length: 15, max: 10 }]
        );
    }
}
