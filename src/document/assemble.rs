//! Final document assembly

use crate::core::checklist::{merge_checklist, render_checklist, ChecklistItem};
use crate::core::project::ProjectProfile;
use crate::document::headers::{CHANGES_HEADING, PROBLEM_HEADING_MARKER};
use crate::document::normalize::collapse_blank_lines;

pub const TASKS_HEADING: &str = "## 🗂️ Referencias de tareas";

/// Render the task-reference block, or `None` when there are no tasks
pub fn task_block(tasks: &[String]) -> Option<String> {
    let items: Vec<String> = tasks
        .iter()
        .map(|task| task.trim())
        .filter(|task| !task.is_empty())
        .map(|task| format!("- {}", task))
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(format!("{}\n{}", TASKS_HEADING, items.join("\n")))
    }
}

/// Insert the task block right before the problem heading, or append it
fn insert_tasks(narrative: &str, block: &str) -> String {
    let mut lines: Vec<&str> = narrative.lines().collect();

    match lines
        .iter()
        .position(|line| line.trim_start().starts_with(PROBLEM_HEADING_MARKER))
    {
        Some(index) => {
            lines.insert(index, "");
            lines.insert(index, block);
            lines.join("\n")
        }
        None => format!("{}\n\n{}", narrative.trim_end(), block),
    }
}

/// Build the final document
///
/// Order: narrative (with task references), changes checklist, merge checklist.
pub fn assemble(
    narrative: &str,
    tasks: &[String],
    profile: ProjectProfile,
    checklist: &[ChecklistItem],
) -> String {
    let body = match task_block(tasks) {
        Some(block) => insert_tasks(narrative, &block),
        None => narrative.to_string(),
    };

    let document = format!(
        "{}\n\n{}\n{}\n\n{}",
        body.trim(),
        CHANGES_HEADING,
        render_checklist(checklist),
        merge_checklist(profile)
    );

    format!("{}\n", collapse_blank_lines(&document))
}
