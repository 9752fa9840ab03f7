//! Marker-line extraction
//!
//! Solution files carry a comment line of the form
//! `@lc app=<app> id=<id> lang=<lang>` identifying the problem platform, the
//! problem id and the source language.

use std::sync::LazyLock;

use regex::Regex;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@lc[ \t]+app=(\S+)[ \t]+id=(\S+)[ \t]+lang=(\S+)")
        .expect("marker pattern should compile")
});

/// Problem metadata parsed from the marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemMetadata {
    /// Problem platform (e.g. "leetcode")
    pub app: String,

    /// Problem identifier, not necessarily numeric
    pub id: String,

    /// Source language tag (e.g. "python3", "cpp")
    pub lang: String,
}

/// Extract metadata from the first marker line found anywhere in `text`
///
/// Returns `None` if the text has no marker line.
pub fn extract(text: &str) -> Option<ProblemMetadata> {
    let captures = MARKER.captures(text)?;
    Some(ProblemMetadata {
        app: captures[1].to_owned(),
        id: captures[2].to_owned(),
        lang: captures[3].to_owned(),
    })
}
