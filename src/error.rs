//! Custom error types for prdraft
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the prdraft application
#[derive(Error, Debug)]
pub enum PrDraftError {
    /// Not running in a git repository
    #[error("This directory is not a git repository.\n\n  → Run prdraft from inside the project whose commits you want to summarize.")]
    NotGitRepository,

    /// The generation tool could not be started at all
    #[error("Cannot start the text generator '{program}': {reason}\n\n  → Make sure Ollama is installed and on your PATH.\n  → Or point 'generator_program' in the config file at the right binary.")]
    GeneratorUnavailable { program: String, reason: String },

    /// The generation tool ran but exited with a failure status
    #[error("Text generation failed ({status}):\n{stderr}\n\n  → Check that the model is pulled: 'ollama pull <model>'.")]
    GenerationFailed { status: String, stderr: String },

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// A setting or argument that cannot be used as given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Clipboard copy failed
    #[error("Could not copy to the clipboard: {0}")]
    Clipboard(String),
}

impl From<toml::de::Error> for PrDraftError {
    fn from(err: toml::de::Error) -> Self {
        PrDraftError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PrDraftError {
    fn from(err: toml::ser::Error) -> Self {
        PrDraftError::Toml(err.to_string())
    }
}

/// Result type alias using PrDraftError
pub type Result<T> = std::result::Result<T, PrDraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_message_includes_stderr() {
        let err = PrDraftError::GenerationFailed {
            status: "exit status: 1".to_string(),
            stderr: "model 'mistral' not found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("exit status: 1"));
        assert!(message.contains("model 'mistral' not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("model = ");
        let err: PrDraftError = parsed.unwrap_err().into();
        assert!(matches!(err, PrDraftError::Toml(_)));
    }
}
