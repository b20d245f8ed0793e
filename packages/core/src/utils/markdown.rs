//! Markdown heading extraction
//!
//! This module scans summary markdown for level-2/level-3 headings, which
//! become the inner ring of the mind map. The scan is a deliberately plain
//! line-by-line regex pass: it does not parse markdown structure, so
//! `#`-prefixed lines inside fenced code blocks are matched too, exactly
//! like the rendering pipeline this feeds.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a level-2 or level-3 heading line: two or three `#` characters,
/// at least one whitespace character, then non-empty content.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{2,3})\s+(.+)$").unwrap());

/// An extracted heading: its markdown depth and cleaned display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Markdown depth (2 or 3)
    pub level: u8,

    /// Heading text with bold markers removed and whitespace trimmed
    pub text: String,
}

/// Extract level-2 and level-3 headings from markdown, in document order
///
/// Level-1 and level-4+ headings are ignored. Repeated heading text is kept
/// (each occurrence becomes its own entry). Heading text has every `**`
/// bold marker removed and surrounding whitespace trimmed.
///
/// Returns an empty vec for input with no matching headings, including the
/// empty string.
///
/// # Examples
///
/// ```
/// use tubemind_core::utils::extract_headings;
///
/// let headings = extract_headings("## Intro\n\ntext\n\n### **Key Concepts**\n");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[0].level, 2);
/// assert_eq!(headings[0].text, "Intro");
/// assert_eq!(headings[1].level, 3);
/// assert_eq!(headings[1].text, "Key Concepts");
/// ```
pub fn extract_headings(text: &str) -> Vec<Heading> {
    text.lines()
        .filter_map(|line| {
            HEADING_RE.captures(line).map(|caps| Heading {
                level: caps[1].len() as u8,
                text: caps[2].replace("**", "").trim().to_string(),
            })
        })
        .collect()
}
