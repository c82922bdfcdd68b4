//! Regex utilities for project-scan
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Compile a pattern with the flags every status rule is matched under:
/// case-insensitive, with `^`/`$` anchoring at line boundaries.
pub fn line_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).multi_line(true).build()
}

/// Markdown heading line classification
pub mod heading {
    /// Lines that interrupt a prose run: sub-headings and horizontal rules
    pub fn is_break(line: &str) -> bool {
        line.starts_with("##") || line.starts_with("---")
    }

    /// Any heading line, including a level-one title
    pub fn is_heading(line: &str) -> bool {
        line.starts_with('#')
    }
}

/// Inline markdown markup removal
pub mod markup {
    use super::*;

    pub static BOLD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid regex pattern")
    });

    pub static LINK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid regex pattern")
    });

    /// Anything that is not a word character, whitespace, comma, period or hyphen
    pub static SPECIAL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[^\w\s,.-]").expect("Invalid regex pattern")
    });

    /// `**text**` -> `text`
    pub fn strip_bold(text: &str) -> String {
        BOLD.replace_all(text, "$1").into_owned()
    }

    /// `[label](url)` -> `label`
    pub fn strip_links(text: &str) -> String {
        LINK.replace_all(text, "$1").into_owned()
    }

    pub fn strip_special(text: &str) -> String {
        SPECIAL.replace_all(text, "").into_owned()
    }

    /// Apply all three passes in order: bold, links, then special characters
    pub fn strip_all(text: &str) -> String {
        strip_special(&strip_links(&strip_bold(text)))
    }
}

/// Inline list splitting (`Rust, Tokio • Serde`)
pub mod list {
    use super::*;

    pub static DELIMITERS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[,•\n]+").expect("Invalid regex pattern")
    });

    /// Split on commas, bullets and newlines; pieces are returned untrimmed
    pub fn split(text: &str) -> impl Iterator<Item = &str> {
        DELIMITERS.split(text)
    }
}
