use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::Result;
use crate::files::{walk_sorted, write_output};
use crate::ignore::IgnoreParser;

/// Where the checklist reads its ignore rules and writes its output.
/// Relative paths are resolved against the walked root.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistOptions {
    pub ignore_file: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl ChecklistOptions {
    pub fn from_config(config: &Config) -> Self {
        ChecklistOptions {
            ignore_file: PathBuf::from(&config.ignore_file),
            output_dir: PathBuf::from(&config.checklist_directory),
            output_file: config.checklist_file.clone(),
        }
    }
}

impl Default for ChecklistOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistEntry {
    pub path: String,
    pub is_dir: bool,
    /// Directories and non-empty files are done
    pub done: bool,
}

impl fmt::Display for ChecklistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'x' } else { ' ' };
        let slash = if self.is_dir { "/" } else { "" };
        write!(f, "[{}] {}{}", mark, self.path, slash)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    pub entries: Vec<ChecklistEntry>,
    pub output_path: PathBuf,
    pub warnings: Vec<BoundaryWarning>,
}

impl Checklist {
    pub fn content(&self) -> String {
        render_entries(&self.entries)
    }

    /// Files still empty
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| !e.done).count()
    }
}

pub fn render_entries(entries: &[ChecklistEntry]) -> String {
    entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_is_empty(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) => {
            warn!(path = %path.display(), "cannot read file size: {}", e);
            false
        }
    }
}

/// Checklist entries for everything under `root` that is not ignored
pub fn collect_entries(root: &Path, parser: &IgnoreParser) -> Result<Vec<ChecklistEntry>> {
    Ok(walk_sorted(root, parser)?
        .into_iter()
        .map(|entry| ChecklistEntry {
            done: entry.is_dir || !file_is_empty(&entry.path),
            path: entry.relative,
            is_dir: entry.is_dir,
        })
        .collect())
}

/// Build the checklist for `root` and write it to the configured output file
pub fn generate_checklist(root: &Path, options: &ChecklistOptions) -> Result<Checklist> {
    let ignore_path = root.join(&options.ignore_file);
    let mut warnings = Vec::new();
    if !ignore_path.is_file() {
        warnings.push(BoundaryWarning::MissingIgnoreFile {
            path: options.ignore_file.display().to_string(),
        });
    }

    let parser = IgnoreParser::from_file(&ignore_path, None)?;
    let entries = collect_entries(root, &parser)?;

    let output_path = write_output(
        &root.join(&options.output_dir),
        &options.output_file,
        &render_entries(&entries),
    )?;

    Ok(Checklist {
        entries,
        output_path,
        warnings,
    })
}
