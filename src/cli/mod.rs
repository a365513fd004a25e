//! CLI module for prdraft
//!
//! This module contains the argument definitions and the draft command
//! handler using clap.

pub mod commands;
pub mod generate;
pub mod tasks;

pub use commands::Cli;
