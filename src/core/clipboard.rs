//! Best-effort clipboard copy through the platform's clipboard utility

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{PrDraftError, Result};

/// Clipboard commands to try, in order, for the current platform
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[];

/// Pipe `text` into a single clipboard command
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(PrDraftError::Clipboard(format!("{} exited with {}", program, status)))
    }
}

/// Copy text to the system clipboard
///
/// Tries each available utility until one succeeds. Callers treat the error
/// as a warning.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut failures = Vec::new();

    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(()) => {
                tracing::debug!("Copied {} bytes with {}", text.len(), program);
                return Ok(());
            }
            Err(e) => failures.push(format!("{}: {}", program, e)),
        }
    }

    if failures.is_empty() {
        return Err(PrDraftError::Clipboard(
            "no clipboard utility for this platform".to_string(),
        ));
    }

    Err(PrDraftError::Clipboard(failures.join("; ")))
}
