//! Free-text query parsing.

use std::sync::LazyLock;

use regex::Regex;

// `-word` at the start or after a space excludes that word.
static EXCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^| )-(\w+)").expect("valid regex"));

static OR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) or ").expect("valid regex"));

/// A parsed free-text query.
///
/// Quotes are stripped, `-word` tokens become exclusions, and the remainder
/// splits on `" or "` into alternative phrases. A haystack matches when any
/// phrase occurs in it and no excluded word does; matching is
/// case-insensitive throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    pub phrases: Vec<String>,
    pub exclude: Vec<String>,
}

impl TextQuery {
    pub fn parse(raw: &str) -> Self {
        let cleaned = raw.replace('"', "");

        let exclude: Vec<String> = EXCLUDE_RE
            .captures_iter(&cleaned)
            .map(|caps| caps[1].to_lowercase())
            .collect();
        let remainder = EXCLUDE_RE.replace_all(&cleaned, "");

        let phrases: Vec<String> = OR_RE
            .split(&remainder)
            .map(|phrase| phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        Self { phrases, exclude }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.exclude.is_empty()
    }

    /// Whether this query accepts the given text.
    ///
    /// A query with no phrases (only exclusions) accepts any text that does
    /// not contain an excluded word.
    pub fn matches(&self, haystack: &str) -> bool {
        let lower = haystack.to_lowercase();

        if self.exclude.iter().any(|word| lower.contains(word)) {
            return false;
        }
        self.phrases.is_empty()
            || self.phrases.iter().any(|phrase| lower.contains(phrase))
    }
}
