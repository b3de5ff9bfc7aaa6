// keywords.rs
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

lazy_static::lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// High-frequency English function words plus common irregular verb forms,
/// excluded from keyword and phrase ranking.
pub static STOP_WORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    // be-verbs
    "is", "are", "was", "were", "be", "been", "being", "am",
    // auxiliaries & modals
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about", "over", "under",
    "between", "through", "after", "before", "up", "out", "off", "down",
    // conjunctions & negation
    "and", "or", "but", "not", "if", "then", "than", "so", "as", "because", "while", "although",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
    // interrogatives & relatives
    "who", "whom", "whose", "what", "which", "when", "where", "how", "why",
    // adverbs & quantifiers
    "very", "also", "just", "too", "more", "most", "much", "many", "few", "all", "both", "only",
    "there", "here", "now", "again", "once",
    // common irregular verb forms
    "go", "goes", "went", "gone", "come", "came", "get", "got", "make", "made", "take", "took",
    "taken", "give", "gave", "given", "say", "says", "said", "see", "saw", "seen", "sit", "sat",
    "stand", "stood", "put", "let", "run", "ran",
];

static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

// Lowercase, strip punctuation, collapse whitespace, split on spaces.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_REGEX.replace_all(&lowered, " ");
    stripped.split_whitespace().map(str::to_string).collect()
}

/// Returns up to `max_keywords` content words ranked by descending frequency.
/// Ties keep first-encountered order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let tokens = tokenize(text);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for token in tokens {
        if token.chars().count() <= 1 || is_stop_word(&token) {
            continue;
        }
        let entry = counts.entry(token.clone()).or_insert(0);
        if *entry == 0 {
            order.push(token);
        }
        *entry += 1;
    }

    // Stable sort keeps insertion order among equal counts.
    order.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    order.truncate(max_keywords);
    order
}

/// Returns repeated 2- and 3-gram phrases occurring at least
/// `min_occurrences` times, sorted by descending count. Windows are anchored
/// on non-stopword first tokens.
pub fn extract_common_phrases(text: &str, min_occurrences: usize) -> Vec<String> {
    let tokens = tokenize(text);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for n in 2..=3usize {
        for window in tokens.windows(n) {
            if window[0].chars().count() <= 1 || is_stop_word(&window[0]) {
                continue;
            }
            let phrase = window.join(" ");
            let entry = counts.entry(phrase.clone()).or_insert(0);
            if *entry == 0 {
                order.push(phrase);
            }
            *entry += 1;
        }
    }

    let mut phrases: Vec<String> = order
        .into_iter()
        .filter(|p| counts[p] >= min_occurrences)
        .collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(counts[p]));
    phrases
}
