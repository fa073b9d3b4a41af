use std::fs;
use std::path::Path;

use clap::ValueEnum;
use tracing::{info, warn};

/// Example files bundled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExampleFile {
    /// `.scaffoldignore`
    IgnoreFile,
    /// `.scaffoldkitrc.yaml`
    ConfigFile,
    /// `scaffold.yaml`
    ScaffoldFile,
}

impl ExampleFile {
    pub const ALL: [ExampleFile; 3] = [
        ExampleFile::IgnoreFile,
        ExampleFile::ConfigFile,
        ExampleFile::ScaffoldFile,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ExampleFile::IgnoreFile => ".scaffoldignore",
            ExampleFile::ConfigFile => ".scaffoldkitrc.yaml",
            ExampleFile::ScaffoldFile => "scaffold.yaml",
        }
    }

    pub fn contents(self) -> &'static str {
        match self {
            ExampleFile::IgnoreFile => include_str!("../templates/.scaffoldignore"),
            ExampleFile::ConfigFile => include_str!("../templates/.scaffoldkitrc.yaml"),
            ExampleFile::ScaffoldFile => include_str!("../templates/scaffold.yaml"),
        }
    }
}

/// Outcome of copying example files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitReport {
    pub copied: Vec<String>,
    /// Destinations that already existed
    pub skipped: Vec<String>,
    /// File name and error message
    pub failed: Vec<(String, String)>,
}

impl InitReport {
    pub fn is_ok(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }
}

/// Copy one example file, or all of them, into `dest`.
///
/// Existing files are never overwritten.
pub fn init_project(target: Option<ExampleFile>, dest: &Path) -> InitReport {
    let files: Vec<ExampleFile> = match target {
        Some(file) => vec![file],
        None => ExampleFile::ALL.to_vec(),
    };

    let mut report = InitReport::default();
    for file in files {
        let name = file.file_name().to_string();
        let path = dest.join(&name);

        if path.exists() {
            info!(file = %name, "already exists, skipping");
            report.skipped.push(name);
            continue;
        }

        match fs::write(&path, file.contents()) {
            Ok(()) => {
                info!(file = %name, "copied example file");
                report.copied.push(name);
            }
            Err(e) => {
                warn!(file = %name, "failed to copy: {}", e);
                report.failed.push((name, e.to_string()));
            }
        }
    }

    report
}
