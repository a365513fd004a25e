//! Cleanup of raw generated text

use once_cell::sync::Lazy;
use regex::Regex;

/// A line made only of dashes or only of equals signs
static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:-{3,}|={3,})\s*$").expect("Invalid separator regex"));

/// An asterisk bullet followed by two or more spaces
static LOOSE_ASTERISK_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \t]*)\*[ \t]{2,}(.*)$").expect("Invalid asterisk bullet regex")
});

static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

/// Normalize generated text
///
/// Drops decorative separator lines, turns `*   item` bullets into `- item`
/// and leaves at most one blank line between blocks. Applying it twice gives
/// the same result as applying it once.
pub fn normalize(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !SEPARATOR_LINE.is_match(line))
        .map(|line| LOOSE_ASTERISK_BULLET.replace(line, "$1- $2").into_owned())
        .collect();

    collapse_blank_lines(&lines.join("\n"))
}

/// Collapse runs of blank lines and trim blank lines at both ends
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN
        .replace_all(text, "\n\n")
        .trim_matches('\n')
        .to_string()
}
