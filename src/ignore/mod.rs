//! gitignore-style path filtering used by `checklist` and `tree`.

mod pattern;
mod rule;

pub use pattern::pattern_to_regex;
pub use rule::IgnoreRule;

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// An ordered set of ignore rules anchored at a base directory
#[derive(Debug, Clone, Default)]
pub struct IgnoreParser {
    base_path: Option<PathBuf>,
    rules: Vec<IgnoreRule>,
}

impl IgnoreParser {
    /// Create an empty parser. Absolute paths are made relative to `base_path`.
    pub fn new(base_path: Option<&Path>) -> Self {
        IgnoreParser {
            base_path: base_path.map(resolve),
            rules: Vec::new(),
        }
    }

    /// Load rules from an ignore file. The base defaults to the file's directory.
    ///
    /// A missing file yields a parser without rules.
    pub fn from_file(file: &Path, base_path: Option<&Path>) -> Result<Self> {
        let base = match base_path {
            Some(base) => base.to_path_buf(),
            None => match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };

        let mut parser = IgnoreParser::new(Some(&base));
        match fs::read_to_string(file) {
            Ok(content) => {
                parser.add_lines(content.lines());
                debug!(file = %file.display(), rules = parser.rules.len(), "loaded ignore file");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(file = %file.display(), "ignore file not found, nothing will be ignored");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(parser)
    }

    /// Load rules from newline-separated text
    pub fn from_string(rules: &str, base_path: Option<&Path>) -> Self {
        let mut parser = IgnoreParser::new(base_path);
        parser.add_lines(rules.lines());
        parser
    }

    /// Add every non-blank, non-comment line. Lines that fail to compile are skipped.
    pub fn add_lines<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Err(e) = self.add_rule(line) {
                warn!("{}", e);
            }
        }
    }

    pub fn add_rule(&mut self, pattern: &str) -> Result<()> {
        self.rules.push(IgnoreRule::from_pattern(pattern)?);
        Ok(())
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when the last rule matching `path` is not a negation
    pub fn is_ignored<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> bool {
        let normalized = self.normalize(path.as_ref());
        let mut ignored = false;
        for rule in &self.rules {
            if rule.matches(&normalized, is_dir) {
                ignored = !rule.negated;
            }
        }
        ignored
    }

    /// Keep only the paths that are not ignored, checking the filesystem for directories
    pub fn filter<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<PathBuf> {
        paths
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !self.is_ignored(p, p.is_dir()))
            .map(Path::to_path_buf)
            .collect()
    }

    /// Describe every rule that matches `path`, in file order
    pub fn explain<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> Vec<String> {
        let normalized = self.normalize(path.as_ref());
        self.rules
            .iter()
            .filter(|rule| rule.matches(&normalized, is_dir))
            .map(|rule| {
                format!(
                    "Rule '{}' ({}) -> Decision: {}",
                    rule.source,
                    if rule.negated { "negated" } else { "applied" },
                    if rule.negated { "kept" } else { "ignored" }
                )
            })
            .collect()
    }

    /// Slash-separated form of `path`, relative to the base when it lies beneath it
    fn normalize(&self, path: &Path) -> String {
        let relative = match &self.base_path {
            Some(base) if path.is_absolute() => path.strip_prefix(base).unwrap_or(path),
            _ => path,
        };

        let mut parts: Vec<String> = Vec::new();
        let mut absolute = false;
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::RootDir => absolute = true,
                Component::ParentDir => parts.push("..".to_string()),
                Component::CurDir | Component::Prefix(_) => {}
            }
        }

        let joined = parts.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    }
}

fn resolve(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
