use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::{Result, ScaffoldKitError};
use crate::files::{walk_sorted, write_output, WalkEntry};
use crate::ignore::IgnoreParser;

/// Paths for the tree command. Relative paths resolve against `project_root`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOptions {
    pub project_root: PathBuf,
    pub ignore_file: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl TreeOptions {
    pub fn from_config(config: &Config, project_root: &Path) -> Self {
        TreeOptions {
            project_root: project_root.to_path_buf(),
            ignore_file: PathBuf::from(&config.ignore_file),
            output_dir: PathBuf::from(&config.tree_directory),
            output_file: config.tree_file.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeOutput {
    pub content: String,
    pub output_path: PathBuf,
    pub warnings: Vec<BoundaryWarning>,
}

/// Turn a pre-ordered walk into nested nodes, keeping sibling order
pub fn build_nodes(entries: &[WalkEntry]) -> Vec<TreeNode> {
    let mut nodes = Vec::new();
    let mut i = 0;

    while i < entries.len() {
        let entry = &entries[i];
        let end = entries[i + 1..]
            .iter()
            .position(|e| e.depth <= entry.depth)
            .map_or(entries.len(), |offset| i + 1 + offset);

        nodes.push(TreeNode {
            name: entry
                .relative
                .rsplit('/')
                .next()
                .unwrap_or(&entry.relative)
                .to_string(),
            is_dir: entry.is_dir,
            children: build_nodes(&entries[i + 1..end]),
        });
        i = end;
    }

    nodes
}

/// Render nodes with box-drawing connectors, one line per node
pub fn render_tree(nodes: &[TreeNode], prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (connector, continuation) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        let slash = if node.is_dir { "/" } else { "" };
        lines.push(format!("{}{}{}{}", prefix, connector, node.name, slash));

        if !node.children.is_empty() {
            lines.extend(render_tree(
                &node.children,
                &format!("{}{}", prefix, continuation),
            ));
        }
    }

    lines
}

/// Name shown on the first line and the output file name for `root_dir`
fn display_and_file(root_dir: &str, output_file: &str) -> (String, String) {
    if root_dir == "." {
        return (".".to_string(), output_file.to_string());
    }

    let stem = Path::new(output_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sanitized = root_dir.replace(['/', '\\'], "-");
    let display = Path::new(root_dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_dir.to_string());

    (format!("{}/", display), format!("{}-{}.txt", stem, sanitized))
}

/// Render the tree below `root_dir` and write it to the configured output file.
///
/// Ignore rules always come from the project root, so paths are matched
/// relative to it even for a partial tree.
pub fn generate_tree(root_dir: &str, options: &TreeOptions) -> Result<TreeOutput> {
    let root = options.project_root.join(root_dir);
    if !root.is_dir() {
        return Err(ScaffoldKitError::MissingDirectory(root_dir.to_string()));
    }

    let (display_root, file_name) = display_and_file(root_dir, &options.output_file);

    let ignore_path = options.project_root.join(&options.ignore_file);
    let mut warnings = Vec::new();
    if !ignore_path.is_file() {
        warnings.push(BoundaryWarning::MissingIgnoreFile {
            path: options.ignore_file.display().to_string(),
        });
    }

    let parser = IgnoreParser::from_file(&ignore_path, Some(&options.project_root))?;
    let entries = walk_sorted(&root, &parser)?;

    let mut lines = vec![display_root];
    lines.extend(render_tree(&build_nodes(&entries), ""));
    let content = lines.join("\n");

    let output_path = write_output(
        &options.project_root.join(&options.output_dir),
        &file_name,
        &content,
    )?;

    Ok(TreeOutput {
        content,
        output_path,
        warnings,
    })
}
