//! Directory walking and report output shared by `checklist` and `tree`.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::ignore::IgnoreParser;
use crate::slug::slugify;

/// One non-ignored entry below a walked root
#[derive(Debug, Clone, PartialEq)]
pub struct WalkEntry {
    /// Slash-separated path relative to the walked root
    pub relative: String,
    pub path: PathBuf,
    /// 1 for direct children of the root
    pub depth: usize,
    pub is_dir: bool,
}

/// Directories before files, then case-insensitive by name
fn sibling_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let key = |e: &DirEntry| {
        (
            !e.file_type().is_dir(),
            e.file_name().to_string_lossy().to_lowercase(),
        )
    };
    key(a).cmp(&key(b))
}

/// Walk `root` depth-first with parents before children. Ignored entries are
/// skipped together with everything beneath them.
pub fn walk_sorted(root: &Path, parser: &IgnoreParser) -> Result<Vec<WalkEntry>> {
    let root = fs::canonicalize(root)?;
    let mut entries = Vec::new();

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .sort_by(sibling_order)
        .into_iter()
        .filter_entry(|e| !parser.is_ignored(e.path(), e.file_type().is_dir()));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        entries.push(WalkEntry {
            relative,
            path: entry.path().to_path_buf(),
            depth: entry.depth(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(entries)
}

/// `<dir>/<slugified stem><extension>` for a configured output file name
pub fn output_path(dir: &Path, file_name: &str) -> PathBuf {
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    dir.join(format!("{}{}", slugify(&stem), extension))
}

/// Write a report, creating the output directory when it is missing
pub fn write_output(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        info!(dir = %dir.display(), "created output directory");
    }

    let path = output_path(dir, file_name);
    fs::write(&path, content)?;
    info!(path = %path.display(), "wrote report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/Nested")).unwrap();
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();
        fs::write(root.join("app.log"), "").unwrap();
        fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("src/Nested/a.txt"), "").unwrap();
        fs::write(root.join("build/out.o"), "bin").unwrap();
        dir
    }

    #[test]
    fn test_walk_order_dirs_first() {
        let dir = layout();
        let entries = walk_sorted(dir.path(), &IgnoreParser::default()).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.relative.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "build",
                "build/out.o",
                "src",
                "src/Nested",
                "src/Nested/a.txt",
                "src/main.rs",
                "app.log",
                "README.md",
            ]
        );
        assert_eq!(entries[3].depth, 2);
        assert!(entries[3].is_dir);
    }

    #[test]
    fn test_walk_prunes_ignored() {
        let dir = layout();
        let parser = IgnoreParser::from_string("build/\n*.log", Some(dir.path()));
        let entries = walk_sorted(dir.path(), &parser).unwrap();
        assert!(entries
            .iter()
            .all(|e| !e.relative.starts_with("build") && e.relative != "app.log"));
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_output_path_is_slugified() {
        let path = output_path(Path::new("out"), "Empty Files_Checklist.txt");
        assert_eq!(path, Path::new("out").join("empty-files-checklist.txt"));
    }

    #[test]
    fn test_write_output_creates_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("reports/nested");
        let path = write_output(&target, "tree.txt", "content").unwrap();
        assert_eq!(path, target.join("tree.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "content");
    }
}
