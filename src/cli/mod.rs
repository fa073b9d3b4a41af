//! CLI definition and command dispatch

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::load_config;
use crate::init::ExampleFile;

/// Project conventions toolkit: commit and branch linting, version bumps,
/// checklists and directory trees
#[derive(Debug, Parser)]
#[command(name = "scaffold-kit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy bundled example files into the current directory
    Init {
        /// Example to copy; all of them when omitted
        #[arg(value_enum)]
        target: Option<ExampleFile>,
    },

    /// Write a checklist of empty files in the current directory
    Checklist,

    /// Write an ASCII tree of a directory
    Tree {
        /// Directory to render, relative to the current directory
        #[arg(default_value = ".")]
        directory: String,

        /// Ignore file to use instead of the configured one
        #[arg(long)]
        ignore_file: Option<PathBuf>,
    },

    /// Check a commit message against the commit conventions
    LintCommit {
        /// Message to check; read from stdin when neither it nor --file is given
        message: Option<String>,

        /// Read the message from a file, such as .git/COMMIT_EDITMSG
        #[arg(short, long, conflicts_with = "message")]
        file: Option<PathBuf>,
    },

    /// Check a branch name against the branch naming conventions
    LintBranch {
        /// Branch name; the current git branch when omitted
        name: Option<String>,
    },

    /// Compute the next version from the commits since the latest version tag
    Bump {
        /// Print only the next version
        #[arg(long)]
        plain: bool,
    },

    /// Check that git tag, Cargo.toml and pyproject.toml versions agree
    CheckVersion,

    /// Print the commit tag table
    Tags,
}

impl Cli {
    /// Run the selected command and return the process exit code
    pub fn execute(self) -> Result<i32> {
        let config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::Init { target } => commands::init(target),
            Commands::Checklist => commands::checklist(&config),
            Commands::Tree {
                directory,
                ignore_file,
            } => commands::tree(&config, &directory, ignore_file),
            Commands::LintCommit { message, file } => {
                commands::lint_commit(&config, message, file.as_deref())
            }
            Commands::LintBranch { name } => commands::lint_branch(&config, name),
            Commands::Bump { plain } => commands::bump(&config, plain),
            Commands::CheckVersion => commands::check_version(),
            Commands::Tags => commands::tags(),
        }
    }
}
