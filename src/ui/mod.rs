//! User interface module: styled terminal output.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_branch_lint, display_commit_lint, display_error,
    display_release_plan, display_status, display_success, display_tag_table,
    display_version_report, display_warning, format_branch_lint, format_commit_lint,
    format_tag_table, format_version_report,
};
