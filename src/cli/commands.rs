//! Command handlers. Each returns the process exit code.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::analyzer::VersionAnalyzer;
use crate::checklist::{generate_checklist, ChecklistOptions};
use crate::config::Config;
use crate::git::{Git2Repository, Repository};
use crate::init::{init_project, ExampleFile};
use crate::lint::{lint_branch_name, lint_commit_message};
use crate::tree::{generate_tree, TreeOptions};
use crate::ui;
use crate::version_check::check_versions;

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Cannot determine the current directory")
}

fn open_repository(dir: &Path) -> Result<Git2Repository> {
    Git2Repository::open(dir).context("Not inside a git repository")
}

pub fn init(target: Option<ExampleFile>) -> Result<i32> {
    if target.is_none() {
        ui::display_status("No example specified. Copying all example files...");
    }

    let report = init_project(target, &current_dir()?);

    for name in &report.copied {
        ui::display_success(&format!(
            "Copied '{}' to the current directory",
            name
        ));
    }
    for name in &report.skipped {
        ui::display_warning(&format!("'{}' already exists, skipping", name));
    }
    for (name, error) in &report.failed {
        ui::display_error(&format!("Failed to copy '{}': {}", name, error));
    }

    Ok(report.exit_code())
}

pub fn checklist(config: &Config) -> Result<i32> {
    let root = current_dir()?;
    let checklist = generate_checklist(&root, &ChecklistOptions::from_config(config))
        .context("Failed to generate checklist")?;

    for warning in &checklist.warnings {
        ui::display_boundary_warning(warning);
    }
    println!("{}\n", checklist.content());
    ui::display_success(&format!(
        "Wrote checklist to {} ({} empty file(s))",
        checklist.output_path.display(),
        checklist.pending()
    ));
    Ok(0)
}

pub fn tree(config: &Config, directory: &str, ignore_file: Option<PathBuf>) -> Result<i32> {
    let root = current_dir()?;
    let mut options = TreeOptions::from_config(config, &root);
    if let Some(ignore_file) = ignore_file {
        options.ignore_file = ignore_file;
    }

    let output = generate_tree(directory, &options)?;

    for warning in &output.warnings {
        ui::display_boundary_warning(warning);
    }
    println!("{}\n", output.content);
    ui::display_success(&format!(
        "Wrote directory tree to {}",
        output.output_path.display()
    ));
    Ok(0)
}

fn read_message(message: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }
    if let Some(file) = file {
        return fs::read_to_string(file)
            .with_context(|| format!("Cannot read commit message from '{}'", file.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Cannot read commit message from stdin")?;
    Ok(buffer)
}

pub fn lint_commit(config: &Config, message: Option<String>, file: Option<&Path>) -> Result<i32> {
    let message = read_message(message, file)?;
    let report = lint_commit_message(&message, &config.conventions);
    debug!(violations = report.violations.len(), "linted commit message");

    ui::display_commit_lint(&report);
    Ok(if report.is_ok() { 0 } else { 1 })
}

pub fn lint_branch(config: &Config, name: Option<String>) -> Result<i32> {
    let name = match name {
        Some(name) => name,
        None => open_repository(&current_dir()?)?
            .current_branch()
            .context("Cannot determine the current branch")?,
    };

    let report = lint_branch_name(&name, &config.conventions);
    ui::display_branch_lint(&report);
    Ok(if report.is_ok() { 0 } else { 1 })
}

pub fn bump(config: &Config, plain: bool) -> Result<i32> {
    let repo = open_repository(&current_dir()?)?;
    let analyzer = VersionAnalyzer::new(config.conventions.clone());
    let plan = analyzer
        .analyze_repository(&repo)
        .context("Failed to analyze commits")?;

    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
    }

    if plain {
        println!("{}", plan.next_version);
    } else {
        ui::display_release_plan(&plan);
    }
    Ok(0)
}

pub fn check_version() -> Result<i32> {
    let cwd = current_dir()?;
    let repo = Git2Repository::open(&cwd).ok();
    if repo.is_none() {
        debug!("not a git repository, skipping tag version");
    }
    // manifests live at the repository root
    let dir = repo
        .as_ref()
        .and_then(|r| r.workdir())
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    let report = check_versions(repo.as_ref(), &dir)?;
    ui::display_version_report(&report);
    Ok(report.exit_code())
}

pub fn tags() -> Result<i32> {
    ui::display_tag_table();
    Ok(0)
}
