//! prdraft - Pull Request description drafts from local git history
//!
//! This library collects commit metadata, asks a local Ollama model for the
//! narrative sections of a PR description, and post-processes the result into
//! a fixed Markdown template with deterministic checklists.

pub mod ai;
pub mod cli;
pub mod core;
pub mod document;
pub mod error;

pub use error::{PrDraftError, Result};
