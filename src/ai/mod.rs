//! AI integration module
//!
//! This module provides local text generation for PR descriptions:
//! - Prompt construction from commit metadata
//! - The Ollama command-line adapter

pub mod ollama;
pub mod prompts;

pub use ollama::{OllamaGenerator, TextGenerator};
