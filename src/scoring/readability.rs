// scoring/readability.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::segmenter::{Lang, segment};

/// Flesch-style metrics over a whole text block. Recomputed on demand,
/// deterministic for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityMetrics {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub average_sentence_length: f64,
    pub average_word_length: f64,
}

static VOWEL_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

/// Computes reading-ease and grade-level metrics for an English text.
/// Empty input yields all-zero averages rather than an error.
pub fn readability(text: &str) -> ReadabilityMetrics {
    let sentence_count = segment(text, Lang::En).len();
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();
    let word_count = words.len();

    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();
    let char_count: usize = words
        .iter()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).count())
        .sum();

    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };
    let average_word_length = if word_count == 0 {
        0.0
    } else {
        char_count as f64 / word_count as f64
    };
    let syllables_per_word = if word_count == 0 {
        0.0
    } else {
        syllable_count as f64 / word_count as f64
    };

    ReadabilityMetrics {
        flesch_reading_ease: round1(206.835 - 1.015 * average_sentence_length - 84.6 * syllables_per_word),
        flesch_kincaid_grade: round1(0.39 * average_sentence_length + 11.8 * syllables_per_word - 15.59),
        average_sentence_length,
        average_word_length,
    }
}

/// Approximate syllable count for one word: vowel-group runs with silent-e,
/// trailing "-le" and "-es"/"-ed" corrections, floored at one.
pub fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase();
    if letters.chars().count() <= 3 {
        return 1;
    }

    let mut count = VOWEL_GROUPS.find_iter(&letters).count();

    if letters.ends_with('e') && count > 1 {
        count -= 1;
    }
    if letters.ends_with("le") && letters.len() > 2 {
        let before = letters.chars().rev().nth(2);
        if matches!(before, Some(c) if !"aeiouy".contains(c)) {
            count += 1;
        }
    }
    if (letters.ends_with("es") || letters.ends_with("ed")) && count > 1 {
        count -= 1;
    }

    count.max(1)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_approximation() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("happy"), 2);
        assert_eq!(count_syllables("cake"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("worked"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("123"), 1);
    }

    #[test]
    fn averages_for_two_plain_sentences() {
        let metrics = readability("The cat sat on the mat. It was happy.");
        // 9 words over 2 sentences.
        assert_eq!(metrics.average_sentence_length, 4.5);
        assert!(metrics.average_word_length > 2.0);
        assert!(metrics.flesch_reading_ease > 80.0);
        assert!(metrics.flesch_kincaid_grade < 3.0);
    }

    #[test]
    fn identical_input_yields_identical_metrics() {
        let text = "Reading comprehension improves with practice. Every learner benefits.";
        let a = readability(text);
        let b = readability(text);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_yields_zeroed_averages() {
        let metrics = readability("");
        assert_eq!(metrics.average_sentence_length, 0.0);
        assert_eq!(metrics.average_word_length, 0.0);
    }

    #[test]
    fn dense_words_lower_reading_ease() {
        let simple = readability("The cat sat. The dog ran.");
        let dense = readability(
            "Interdepartmental organizational restructuring necessitated comprehensive procedural documentation.",
        );
        assert!(dense.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(dense.flesch_kincaid_grade > simple.flesch_kincaid_grade);
    }
}
