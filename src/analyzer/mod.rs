//! Analysis engine for determining the release impact of commits

pub mod version_analyzer;

pub use version_analyzer::{Analysis, CommitImpact, ReleasePlan, VersionAnalyzer};
