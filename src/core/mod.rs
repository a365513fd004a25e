//! Core functionality for prdraft
//!
//! This module contains shared business logic including:
//! - Git metadata queries
//! - Project profile detection
//! - Checklist marking and merge checklists
//! - Application configuration
//! - Draft persistence and clipboard copy

pub mod checklist;
pub mod clipboard;
pub mod config;
pub mod git;
pub mod output;
pub mod project;

pub use config::Config;
pub use git::{CommitBatch, GitRepository, VersionControl};
pub use output::OutputLocation;
pub use project::ProjectProfile;
