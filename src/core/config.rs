//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Generator program and model selection
//! - Output root directory for saved drafts
//! - Clipboard behavior

use std::fs;
use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};

use crate::error::{PrDraftError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Model passed to `<generator_program> run <model>`
    #[serde(default = "default_model")]
    pub model: String,

    /// Binary used for text generation
    #[serde(default = "default_generator_program")]
    pub generator_program: String,

    /// Root folder for saved drafts; `<home>/KSH/Projects` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_root: Option<PathBuf>,

    /// Copy the final document to the clipboard
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,
}

fn default_model() -> String {
    "mistral".to_string()
}

fn default_generator_program() -> String {
    "ollama".to_string()
}

fn default_clipboard() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            generator_program: default_generator_program(),
            output_root: None,
            clipboard: default_clipboard(),
        }
    }
}

impl Config {
    /// Load configuration from file, or fall back to defaults if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reject settings the generator cannot be started with
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(PrDraftError::InvalidInput(
                "model name is empty; set it with --model or in the config file".into(),
            ));
        }
        if self.generator_program.trim().is_empty() {
            return Err(PrDraftError::InvalidInput(
                "generator_program is empty in the config file".into(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file, returning the path written
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "prdraft", "prdraft")
            .ok_or_else(|| PrDraftError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Resolve the root folder drafts are saved under
    pub fn resolved_output_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.output_root {
            return Ok(root.clone());
        }

        let user_dirs = UserDirs::new()
            .ok_or_else(|| PrDraftError::Config("Could not determine home directory".into()))?;

        Ok(user_dirs.home_dir().join("KSH").join("Projects"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "mistral");
        assert_eq!(config.generator_program, "ollama");
        assert!(config.output_root.is_none());
        assert!(config.clipboard);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("model = \"llama3\"\n").unwrap();
        assert_eq!(config.model, "llama3");
        assert_eq!(config.generator_program, "ollama");
        assert!(config.clipboard);
    }

    #[test]
    fn test_explicit_output_root_wins() {
        let config = Config::from_toml("output_root = \"/tmp/drafts\"\nclipboard = false\n").unwrap();
        assert_eq!(
            config.resolved_output_root().unwrap(),
            PathBuf::from("/tmp/drafts")
        );
        assert!(!config.clipboard);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            Config::from_toml("clipboard = \"maybe\""),
            Err(PrDraftError::Toml(_))
        ));
    }

    #[test]
    fn test_blank_model_is_invalid_input() {
        let config = Config {
            model: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(PrDraftError::InvalidInput(_))));

        let config = Config {
            generator_program: String::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(PrDraftError::InvalidInput(_))));

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip_keeps_fields() {
        let config = Config {
            model: "codellama".to_string(),
            output_root: Some(PathBuf::from("/srv/prs")),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
