//! CLI command definitions using clap
//!
//! Defines the argument structure for the `prdraft` CLI tool.

use std::path::PathBuf;

use clap::Parser;

/// prdraft - Pull Request description drafts from local git history
///
/// Summarizes the last COMMITS commits with a local Ollama model and saves a
/// Markdown draft under <home>/KSH/Projects/<project> - PR/<date>/.
#[derive(Parser, Debug)]
#[command(name = "prdraft", version, about, long_about = None)]
pub struct Cli {
    /// Number of commits to summarize
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub commits: u32,

    /// Model passed to `ollama run`
    #[arg(short, long, env = "PRDRAFT_MODEL")]
    pub model: Option<String>,

    /// Root folder for saved drafts
    #[arg(short, long, env = "PRDRAFT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Task reference to include (repeatable)
    #[arg(short, long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Ask for task references interactively
    #[arg(short, long)]
    pub interactive_tasks: bool,

    /// Do not copy the draft to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Also print the final draft to stdout
    #[arg(long)]
    pub print: bool,

    /// Write a config file with the current settings and exit
    #[arg(long)]
    pub init_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["prdraft"]).unwrap();
        assert_eq!(cli.commits, 1);
        assert!(cli.tasks.is_empty());
        assert!(!cli.no_clipboard);
    }

    #[test]
    fn test_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "prdraft",
            "3",
            "--model",
            "llama3",
            "-t",
            "Fix login bug",
            "--task",
            "JIRA-42",
            "--no-clipboard",
        ])
        .unwrap();
        assert_eq!(cli.commits, 3);
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert_eq!(cli.tasks, vec!["Fix login bug", "JIRA-42"]);
        assert!(cli.no_clipboard);
    }

    #[test]
    fn test_rejects_zero_and_text() {
        assert!(Cli::try_parse_from(["prdraft", "0"]).is_err());
        assert!(Cli::try_parse_from(["prdraft", "muchos"]).is_err());
    }
}
