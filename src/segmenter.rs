// segmenter.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Zh,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

static EN_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static ZH_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？]+").unwrap());

/// Splits a text block into ordered sentences on runs of end punctuation
/// (`.!?` for English, `。！？` for Chinese). Terminators are consumed and
/// empty results discarded.
///
/// Boundary detection is purely punctuation driven: abbreviations such as
/// "Mr. Smith" split early. Callers relying on alignment output expect this
/// behavior, so it stays as is.
pub fn segment(text: &str, lang: Lang) -> Vec<String> {
    let boundary = match lang {
        Lang::En => &EN_BOUNDARY,
        Lang::Zh => &ZH_BOUNDARY,
    };
    boundary
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Regex to handle emojis and symbols
static CLEANUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\u{1F900}-\u{1F9FF}\u{2600}-\u{27BF}\u{2300}-\u{23FF}]+",
    )
    .unwrap()
});

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Filters out emojis and other non-essential symbols and collapses
/// whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    let cleaned = CLEANUP_REGEX.replace_all(text, " ");
    WHITESPACE_REGEX
        .replace_all(cleaned.trim(), " ")
        .into_owned()
}
