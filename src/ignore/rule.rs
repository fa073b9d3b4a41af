use regex::Regex;

use super::pattern::pattern_to_regex;
use crate::error::{Result, ScaffoldKitError};

/// A single compiled line from an ignore file
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    /// The line as written, without surrounding whitespace
    pub source: String,
    pub negated: bool,
    pub dir_only: bool,
    matcher: Regex,
    /// Matches the named path itself, used to keep dir-only rules off plain files
    exact: Regex,
}

impl IgnoreRule {
    /// Compile one ignore line. Blank lines and comments are the caller's concern.
    pub fn from_pattern(line: &str) -> Result<Self> {
        let source = line.trim().to_string();
        let mut pattern = source.as_str();

        let negated = pattern.starts_with('!');
        if negated {
            pattern = &pattern[1..];
        } else if let Some(rest) = pattern.strip_prefix(r"\!") {
            pattern = rest;
        }
        if let Some(rest) = pattern.strip_prefix(r"\#") {
            pattern = rest;
        }

        let dir_only = pattern.ends_with('/');
        let pattern = pattern.trim_end_matches('/');

        if pattern.is_empty() {
            return Err(ScaffoldKitError::pattern(format!(
                "Empty ignore pattern '{}'",
                source
            )));
        }

        let exact_src = pattern_to_regex(pattern);
        let matcher_src = if dir_only {
            // the directory and everything below it
            format!("{}(?:/.*)?$", &exact_src[..exact_src.len() - 1])
        } else {
            exact_src.clone()
        };

        let compile = |src: &str| {
            Regex::new(src).map_err(|e| {
                ScaffoldKitError::pattern(format!("Invalid ignore pattern '{}': {}", source, e))
            })
        };

        Ok(IgnoreRule {
            matcher: compile(&matcher_src)?,
            exact: compile(&exact_src)?,
            source,
            negated,
            dir_only,
        })
    }

    /// Check a slash-separated path relative to the ignore file's base
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        if !self.matcher.is_match(path) {
            return false;
        }
        if !self.dir_only || is_dir {
            return true;
        }
        // a file only matches through one of its parent directories
        path.match_indices('/').any(|(i, _)| self.exact.is_match(&path[..i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rule() {
        let rule = IgnoreRule::from_pattern("*.log").unwrap();
        assert!(!rule.negated);
        assert!(!rule.dir_only);
        assert!(rule.matches("debug.log", false));
        assert!(rule.matches("logs/debug.log", false));
    }

    #[test]
    fn test_negated_rule() {
        let rule = IgnoreRule::from_pattern("!important.log").unwrap();
        assert!(rule.negated);
        assert!(rule.matches("important.log", false));
    }

    #[test]
    fn test_dir_only_rule() {
        let rule = IgnoreRule::from_pattern("build/").unwrap();
        assert!(rule.dir_only);
        assert!(rule.matches("build", true));
        assert!(rule.matches("build/out.o", false));
        assert!(rule.matches("src/build/out.o", false));
        assert!(!rule.matches("build", false));
    }

    #[test]
    fn test_dir_only_rule_covers_same_named_entries_inside() {
        let rule = IgnoreRule::from_pattern("build/").unwrap();
        assert!(rule.matches("build/build", false));
        assert!(rule.matches("build/build", true));
        assert!(rule.matches("src/build/nested/build", false));
        assert!(!rule.matches("src/build", false));

        let anchored = IgnoreRule::from_pattern("/logs/").unwrap();
        assert!(anchored.matches("logs/app/logs", false));
        assert!(!anchored.matches("app/logs", false));
    }

    #[test]
    fn test_escaped_leading_characters() {
        let bang = IgnoreRule::from_pattern(r"\!literal").unwrap();
        assert!(!bang.negated);
        assert!(bang.matches("!literal", false));

        let hash = IgnoreRule::from_pattern(r"\#notes").unwrap();
        assert!(hash.matches("#notes", false));
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert!(IgnoreRule::from_pattern("/").is_err());
        assert!(IgnoreRule::from_pattern("!").is_err());
    }
}
