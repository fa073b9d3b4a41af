pub mod analyzer;
pub mod boundary;
pub mod checklist;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod git;
pub mod ignore;
pub mod init;
pub mod lint;
pub mod slug;
pub mod tree;
pub mod ui;
pub mod version_check;

pub use error::{Result, ScaffoldKitError};
