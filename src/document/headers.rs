//! Canonical section headings
//!
//! Generated headings come back in many shapes: with or without `#`, wrapped
//! in `**`, numbered, missing accents, or followed by extra text. Each rule in
//! [`HEADER_RULES`] recognizes one section and either rewrites the line to the
//! canonical emoji heading or cuts the document there. Sections the generator
//! is not trusted with (changes and merge checklists) are cut; they are rebuilt
//! locally by the assembler.

use once_cell::sync::Lazy;
use regex::Regex;

/// What to do with a line that matches a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Replace the line with this canonical heading
    Rewrite(&'static str),
    /// Drop the line and everything after it
    Truncate,
}

/// One recognized section heading
#[derive(Debug)]
pub struct HeaderRule {
    pub pattern: Regex,
    pub action: HeaderAction,
}

pub const SUMMARY_HEADING: &str = "## 📌 Resumen del cambio";
pub const PROBLEM_HEADING: &str = "## 🔍 ¿Qué problema soluciona?";
pub const TESTING_HEADING: &str = "## 🚀 ¿Cómo probarlo?";
pub const CONSIDERATIONS_HEADING: &str = "## ⚠️ Consideraciones adicionales";
pub const CHANGES_HEADING: &str = "## 🛠️ Cambios realizados";

/// Marker the task-reference block is inserted in front of
pub const PROBLEM_HEADING_MARKER: &str = "## 🔍";

/// Optional heading marks, bold, numbering and emoji before the title text
const PREFIX: &str =
    r"(?i)^\s*(?:#{1,6}\s*)?(?:\*\*|__)?\s*(?:\d+[.)]\s*)?(?:[\p{So}\u{FE0F}\u{200D}]+\s*)?(?:\*\*|__)?\s*";

fn rule(title: &str, action: HeaderAction) -> HeaderRule {
    HeaderRule {
        pattern: Regex::new(&format!("{}{}", PREFIX, title)).expect("Invalid header rule regex"),
        action,
    }
}

/// Ordered heading rules; the first match wins
pub static HEADER_RULES: Lazy<Vec<HeaderRule>> = Lazy::new(|| {
    vec![
        rule(
            r"resumen\s+del\s+cambio",
            HeaderAction::Rewrite(SUMMARY_HEADING),
        ),
        rule(
            r"¿?\s*qu[eé]\s+problema\s+soluciona",
            HeaderAction::Rewrite(PROBLEM_HEADING),
        ),
        rule(
            r"¿?\s*c[oó]mo\s+probarlo",
            HeaderAction::Rewrite(TESTING_HEADING),
        ),
        rule(
            r"consideraciones\s+adicionales",
            HeaderAction::Rewrite(CONSIDERATIONS_HEADING),
        ),
        rule(r"cambios\s+realizados", HeaderAction::Truncate),
        rule(r"checklist\b", HeaderAction::Truncate),
    ]
});

/// Find the first rule matching a line
pub fn match_header(line: &str) -> Option<&'static HeaderRule> {
    HEADER_RULES.iter().find(|rule| rule.pattern.is_match(line))
}

/// Rewrite recognized headings and drop untrusted trailing sections
///
/// Every rewritten heading is preceded by exactly one blank line. Lines that
/// match no rule pass through unchanged.
pub fn repair_headers(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();

    for line in text.lines() {
        match match_header(line).map(|rule| rule.action) {
            Some(HeaderAction::Truncate) => {
                tracing::debug!("Discarding generated section from {:?}", line.trim());
                break;
            }
            Some(HeaderAction::Rewrite(canonical)) => {
                if out.last().map_or(true, |prev| !prev.trim().is_empty()) {
                    out.push("");
                }
                out.push(canonical);
            }
            None => out.push(line),
        }
    }

    out.join("\n").trim_end().to_string()
}
