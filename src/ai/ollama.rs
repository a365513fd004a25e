//! Local text generation through the Ollama CLI
//!
//! The generator is an opaque external process: the prompt goes in on
//! stdin, the generated text comes back on stdout. Any failure status is
//! fatal for the run.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::config::Config;
use crate::error::{PrDraftError, Result};

/// Something that turns a prompt into generated text
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Runs `<program> run <model>` and blocks until it exits
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    program: String,
    model: String,
}

impl OllamaGenerator {
    pub fn new(program: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            model: model.into(),
        }
    }

    /// Create a generator from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.generator_program.clone(), config.model.clone())
    }

    /// Get the current model name
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            "Running {} run {} with a {}-byte prompt",
            self.program,
            self.model,
            prompt.len()
        );

        let unavailable = |e: std::io::Error| PrDraftError::GeneratorUnavailable {
            program: self.program.clone(),
            reason: e.to_string(),
        };

        let mut child = Command::new(&self.program)
            .args(["run", &self.model])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(unavailable)?;

        // stdin must be dropped before waiting or the generator never sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(prompt.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
                tracing::debug!("Generator closed stdin early: {}", e);
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(PrDraftError::GenerationFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let generator = OllamaGenerator::new("prdraft-no-such-generator", "mistral");
        let err = generator.generate("hola").unwrap_err();
        assert!(matches!(err, PrDraftError::GeneratorUnavailable { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            model: "llama3".to_string(),
            ..Config::default()
        };
        let generator = OllamaGenerator::from_config(&config);
        assert_eq!(generator.model_name(), "llama3");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_process_is_generation_failure() {
        // `false run <model>` ignores its arguments and exits with status 1
        let generator = OllamaGenerator::new("false", "mistral");
        let err = generator.generate("hola").unwrap_err();
        assert!(matches!(err, PrDraftError::GenerationFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_decoded_lossily_and_prompt_sent_on_stdin() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let received = dir.path().join("prompt.txt");
        let script = dir.path().join("fake-ollama");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\ncat > '{}'\nprintf 'ok \\377 fin'\n",
                received.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let generator = OllamaGenerator::new(script.to_string_lossy(), "mistral");
        let text = generator.generate("Resumen de commits:\n- Add login").unwrap();

        assert_eq!(text, "ok \u{FFFD} fin");
        assert_eq!(
            fs::read_to_string(&received).unwrap(),
            "Resumen de commits:\n- Add login"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_generator_ignoring_stdin_still_reaped() {
        // `true` exits before the prompt is written; the broken pipe is
        // tolerated and the exit status decides the result
        let generator = OllamaGenerator::new("true", "mistral");
        let prompt = "x".repeat(1 << 20);
        assert_eq!(generator.generate(&prompt).unwrap(), "");
    }
}
