use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::parse_version_tag;
use crate::error::Result;
use crate::git::Repository;

/// Places a project version is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    GitTag,
    CargoToml,
    PyprojectToml,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VersionSource::GitTag => "Git tag",
            VersionSource::CargoToml => "Cargo.toml",
            VersionSource::PyprojectToml => "pyproject.toml",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceVersion {
    pub source: VersionSource,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyStatus {
    /// No source declares a version
    NoneFound,
    Consistent,
    Inconsistent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionReport {
    pub sources: Vec<SourceVersion>,
}

impl VersionReport {
    pub fn status(&self) -> ConsistencyStatus {
        let mut found = self.sources.iter().filter_map(|s| s.version.as_deref());
        let Some(first) = found.next() else {
            return ConsistencyStatus::NoneFound;
        };
        if found.all(|v| v == first) {
            ConsistencyStatus::Consistent
        } else {
            ConsistencyStatus::Inconsistent
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.status() {
            ConsistencyStatus::Inconsistent => 1,
            _ => 0,
        }
    }
}

/// Strip a single leading `v`
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Highest semantic version among the repository's tags, without its `v` prefix
pub fn git_tag_version<R: Repository>(repo: &R) -> Result<Option<String>> {
    let latest = repo
        .list_tags()?
        .iter()
        .filter_map(|tag| parse_version_tag(tag).ok())
        .max();
    Ok(latest.map(|v| v.to_string()))
}

fn read_toml(path: &Path) -> Result<Option<toml::Table>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    match content.parse::<toml::Table>() {
        Ok(table) => Ok(Some(table)),
        Err(e) => {
            warn!(file = %path.display(), "cannot parse: {}", e);
            Ok(None)
        }
    }
}

fn string_at(table: &toml::Table, keys: &[&str]) -> Option<String> {
    let (last, parents) = keys.split_last()?;
    let mut current = table;
    for key in parents {
        current = current.get(*key)?.as_table()?;
    }
    current.get(*last)?.as_str().map(|s| s.to_string())
}

/// `[package].version`, falling back to `[workspace.package].version`
/// when the package inherits it
pub fn cargo_toml_version(dir: &Path) -> Result<Option<String>> {
    Ok(read_toml(&dir.join("Cargo.toml"))?.and_then(|table| {
        string_at(&table, &["package", "version"])
            .or_else(|| string_at(&table, &["workspace", "package", "version"]))
    }))
}

/// `[project].version`
pub fn pyproject_version(dir: &Path) -> Result<Option<String>> {
    Ok(read_toml(&dir.join("pyproject.toml"))?
        .and_then(|table| string_at(&table, &["project", "version"])))
}

/// Collect the version from every source. `repo` is `None` outside a git repository.
pub fn check_versions<R: Repository>(repo: Option<&R>, dir: &Path) -> Result<VersionReport> {
    let git = match repo {
        Some(repo) => git_tag_version(repo)?,
        None => None,
    };

    let sources = vec![
        SourceVersion {
            source: VersionSource::GitTag,
            version: git,
        },
        SourceVersion {
            source: VersionSource::CargoToml,
            version: cargo_toml_version(dir)?.map(|v| normalize_version(&v).to_string()),
        },
        SourceVersion {
            source: VersionSource::PyprojectToml,
            version: pyproject_version(dir)?.map(|v| normalize_version(&v).to_string()),
        },
    ];

    for source in &sources {
        debug!(source = %source.source, version = ?source.version, "version source");
    }

    Ok(VersionReport { sources })
}
