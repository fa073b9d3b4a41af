//! Formatting functions for terminal output.
//!
//! `format_*` functions build strings and are tested directly; `display_*`
//! functions print them.

use console::style;

use crate::analyzer::ReleasePlan;
use crate::boundary::BoundaryWarning;
use crate::domain::{BranchName, CommitTag, Impact};
use crate::lint::{BranchReport, LintReport};
use crate::version_check::{ConsistencyStatus, VersionReport};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning with a yellow sign.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}

/// The commit tag table: keyword, meaning and release impact
pub fn format_tag_table() -> String {
    let mut lines = vec![format!("{:<10} {:<8} {}", "TAG", "IMPACT", "MEANING")];
    for tag in CommitTag::ALL {
        lines.push(format!(
            "{:<10} {:<8} {}",
            tag.keyword(),
            tag.impact().to_string(),
            tag.meaning()
        ));
    }
    lines.join("\n")
}

pub fn display_tag_table() {
    println!("{}", format_tag_table());
}

/// Lines describing a commit message lint result
pub fn format_commit_lint(report: &LintReport) -> Vec<String> {
    if report.exempt {
        return vec![format!("'{}' is exempt from linting", report.header)];
    }
    if report.is_ok() {
        return vec![format!("'{}' follows the commit conventions", report.header)];
    }

    let mut lines = vec![format!("'{}' breaks the commit conventions:", report.header)];
    lines.extend(report.violations.iter().map(|v| format!("  - {}", v)));
    lines
}

pub fn display_commit_lint(report: &LintReport) {
    let mut lines = format_commit_lint(report).into_iter();
    let Some(first) = lines.next() else {
        return;
    };
    if report.is_ok() {
        display_success(&first);
    } else {
        display_error(&first);
        for line in lines {
            eprintln!("{}", line);
        }
    }
}

/// Lines describing a branch name lint result
pub fn format_branch_lint(report: &BranchReport) -> Vec<String> {
    match &report.result {
        Ok(BranchName::Topic {
            tag, breaking: true, ..
        }) => vec![format!(
            "'{}' is a valid {} branch (breaking)",
            report.name,
            tag.keyword()
        )],
        Ok(BranchName::Topic { tag, .. }) => vec![format!(
            "'{}' is a valid {} branch",
            report.name,
            tag.keyword()
        )],
        Ok(branch) => vec![format!("'{}' is a {} branch", report.name, branch.kind())],
        Err(violations) => {
            let mut lines = vec![format!(
                "'{}' breaks the branch naming conventions:",
                report.name
            )];
            lines.extend(violations.iter().map(|v| format!("  - {}", v)));
            lines
        }
    }
}

pub fn display_branch_lint(report: &BranchReport) {
    let mut lines = format_branch_lint(report).into_iter();
    let Some(first) = lines.next() else {
        return;
    };
    if report.is_ok() {
        display_success(&first);
    } else {
        display_error(&first);
        for line in lines {
            eprintln!("{}", line);
        }
    }
}

/// Display the commits behind a release plan and the proposed version.
///
/// Shows up to 10 commits with their impact.
pub fn display_release_plan(plan: &ReleasePlan) {
    let since = plan.latest_tag.as_deref().unwrap_or("the first commit");
    println!(
        "\n{}",
        style(format!("Analyzing {} commit(s) since {}", plan.commits.len(), since)).bold()
    );

    for (i, commit) in plan.analysis.commits.iter().take(10).enumerate() {
        let summary: String = commit.summary.chars().take(60).collect();
        let impact = match commit.impact {
            Impact::Major => style(commit.impact.to_string()).red(),
            Impact::Minor => style(commit.impact.to_string()).green(),
            Impact::Patch => style(commit.impact.to_string()).cyan(),
            Impact::None => style(commit.impact.to_string()).dim(),
        };
        println!("  {}. [{}] {}", i + 1, impact, summary);
    }

    if plan.analysis.commits.len() > 10 {
        println!(
            "  ... and {} more commits",
            plan.analysis.commits.len() - 10
        );
    }

    match &plan.current_version {
        Some(current) => {
            println!("\n{}", style("Proposed Version Change:").bold());
            println!("  From: {}", style(current).red());
            println!("  To:   {}", style(&plan.next_version).green());
        }
        None => {
            println!("\n{}", style("Initial Version:").bold());
            println!("  New version: {}", style(&plan.next_version).green());
        }
    }
}

/// One line per version source plus a verdict
pub fn format_version_report(report: &VersionReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .sources
        .iter()
        .map(|s| {
            format!(
                "{} version: {}",
                s.source,
                s.version.as_deref().unwrap_or("Not found")
            )
        })
        .collect();

    lines.push(
        match report.status() {
            ConsistencyStatus::NoneFound => {
                "Could not determine any versions (this may be normal for new repos)"
            }
            ConsistencyStatus::Consistent => "All versions are consistent",
            ConsistencyStatus::Inconsistent => "Version inconsistency detected!",
        }
        .to_string(),
    );
    lines
}

pub fn display_version_report(report: &VersionReport) {
    let lines = format_version_report(report);
    let Some((verdict, sources)) = lines.split_last() else {
        return;
    };
    for line in sources {
        display_status(line);
    }
    match report.status() {
        ConsistencyStatus::NoneFound => display_status(verdict),
        ConsistencyStatus::Consistent => display_success(verdict),
        ConsistencyStatus::Inconsistent => {
            display_error(verdict);
            eprintln!("All versions should match. Please update inconsistent versions.");
        }
    }
}
