use crate::config::ConventionsConfig;
use crate::domain::{BranchName, BranchViolation};

/// Outcome of linting one branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReport {
    pub name: String,
    pub result: Result<BranchName, Vec<BranchViolation>>,
}

impl BranchReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn violations(&self) -> &[BranchViolation] {
        match &self.result {
            Ok(_) => &[],
            Err(violations) => violations,
        }
    }
}

/// Lint a branch name against the naming conventions
pub fn lint_branch_name(name: &str, config: &ConventionsConfig) -> BranchReport {
    BranchReport {
        name: name.trim().to_string(),
        result: BranchName::parse(name, &config.protected_branches),
    }
}
