//! Interactive collection of task references

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Ask for task references, one per line, until an empty line or EOF
pub fn prompt_tasks<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<String>> {
    writeln!(
        output,
        "🗂️  Referencias de tareas (una por línea, Enter vacío para terminar):"
    )?;

    let mut tasks = Vec::new();
    loop {
        write!(output, "  > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let task = line.trim();
        if task.is_empty() {
            break;
        }
        tasks.push(task.to_string());
    }

    Ok(tasks)
}

/// Ask on the terminal
pub fn prompt_tasks_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_tasks(&mut stdin.lock(), &mut stdout)
}
