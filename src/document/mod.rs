//! Post-processing of generated text
//!
//! Raw generator output goes through three pure stages:
//! - `normalize`: separator lines, list markers, blank lines
//! - `headers`: canonical headings, untrusted sections dropped
//! - `assemble`: task references and deterministic checklists appended

pub mod assemble;
pub mod headers;
pub mod normalize;

pub use assemble::assemble;
pub use headers::repair_headers;
pub use normalize::normalize;

/// Normalize raw generated text and repair its headings
pub fn clean_generated(raw: &str) -> String {
    repair_headers(&normalize(raw))
}
