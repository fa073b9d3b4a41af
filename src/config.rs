use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldKitError};

/// Config file names searched in the working directory, in order
pub const CONFIG_CANDIDATES: [&str; 5] = [
    ".scaffoldkitrc.yaml",
    "scaffoldkitrc.yaml",
    ".scaffoldkitrc",
    ".scaffoldkitrc.json",
    "scaffoldkitrc.json",
];

/// Represents the complete configuration for scaffold-kit.
///
/// Contains output locations for the checklist and tree commands, the ignore
/// file, and the commit and branch convention settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Structure file name. No command reads it; it is kept for rc-file
    /// compatibility so configs that set it keep their value.
    #[serde(default = "default_scaffold_file")]
    pub scaffold_file: String,

    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    #[serde(default = "default_directory")]
    pub checklist_directory: String,

    #[serde(default = "default_checklist_file")]
    pub checklist_file: String,

    #[serde(default = "default_directory")]
    pub tree_directory: String,

    #[serde(default = "default_tree_file")]
    pub tree_file: String,

    #[serde(default)]
    pub conventions: ConventionsConfig,
}

fn default_scaffold_file() -> String {
    "scaffold.yaml".to_string()
}

fn default_ignore_file() -> String {
    ".scaffoldignore".to_string()
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_checklist_file() -> String {
    "empty-files-checklist.txt".to_string()
}

fn default_tree_file() -> String {
    "tree.txt".to_string()
}

fn default_max_header_length() -> usize {
    72
}

fn default_protected_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string(), "develop".to_string()]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec![
        "BREAKING CHANGE:".to_string(),
        "BREAKING-CHANGE:".to_string(),
    ]
}

/// Messages git writes on its own; the linter lets them through.
fn default_exempt_prefixes() -> Vec<String> {
    vec![
        "Merge ".to_string(),
        "Revert \"".to_string(),
        "fixup! ".to_string(),
        "squash! ".to_string(),
    ]
}

/// Settings for commit message and branch name linting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionsConfig {
    #[serde(default = "default_max_header_length")]
    pub max_header_length: usize,

    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,

    #[serde(default = "default_exempt_prefixes")]
    pub exempt_prefixes: Vec<String>,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        ConventionsConfig {
            max_header_length: default_max_header_length(),
            protected_branches: default_protected_branches(),
            breaking_change_indicators: default_breaking_change_indicators(),
            exempt_prefixes: default_exempt_prefixes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scaffold_file: default_scaffold_file(),
            ignore_file: default_ignore_file(),
            checklist_directory: default_directory(),
            checklist_file: default_checklist_file(),
            tree_directory: default_directory(),
            tree_file: default_tree_file(),
            conventions: ConventionsConfig::default(),
        }
    }
}

/// Finds the first config file present in `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Parses a config file. `.json` files are read as JSON, everything else as YAML.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScaffoldKitError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");

    if is_json {
        return serde_json::from_str(&content).map_err(|e| {
            ScaffoldKitError::config(format!("Invalid JSON in '{}': {}", path.display(), e))
        });
    }

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        ScaffoldKitError::config(format!("Invalid YAML in '{}': {}", path.display(), e))
    })
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. The first of [`CONFIG_CANDIDATES`] in the current directory
/// 3. `.scaffoldkitrc.yaml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        debug!(path = %path.display(), "loading explicit config");
        return load_config_file(path);
    }

    let cwd = std::env::current_dir()?;
    if let Some(path) = find_config_file(&cwd) {
        debug!(path = %path.display(), "loading project config");
        return load_config_file(&path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(".scaffoldkitrc.yaml");
        if path.is_file() {
            debug!(path = %path.display(), "loading user config");
            return load_config_file(&path);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}
