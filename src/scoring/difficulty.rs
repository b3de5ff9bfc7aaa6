// scoring/difficulty.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const LENGTH_WEIGHT: f64 = 0.25;
const VOCABULARY_WEIGHT: f64 = 0.30;
const SYNTAX_WEIGHT: f64 = 0.25;
const TENSE_WEIGHT: f64 = 0.20;

/// Conjunctions and relative pronouns counted toward the syntax sub-score.
const CONNECTIVES: &[&str] = &[
    "and", "but", "or", "so", "because", "if", "when", "while", "although", "that", "which", "who",
    "whom", "whose",
];

static PAST_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:was|were|did)\b|\b[a-z]+ed\b").unwrap());
static PERFECT_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:have|has|had)\s+(?:been\s+)?[a-z]+").unwrap());
static CONTINUOUS_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:am|is|are|was|were|been)\s+[a-z]+ing\b").unwrap());

/// Per-sentence difficulty sub-scores, each within [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyBreakdown {
    pub length: u8,
    pub vocabulary: u8,
    pub syntax: u8,
    pub tense: u8,
    pub overall: u8,
}

/// Rates a sentence 1 (easiest) to 5 (hardest) from length, vocabulary,
/// syntax and tense-marker density. Deterministic for identical input.
pub fn score_difficulty(sentence: &str) -> u8 {
    difficulty_breakdown(sentence).overall
}

pub fn difficulty_breakdown(sentence: &str) -> DifficultyBreakdown {
    let words: Vec<&str> = sentence.split_whitespace().collect();

    let length = length_score(words.len());
    let vocabulary = vocabulary_score(&words);
    let syntax = syntax_score(&words);
    let tense = tense_score(sentence);

    let weighted = LENGTH_WEIGHT * f64::from(length)
        + VOCABULARY_WEIGHT * f64::from(vocabulary)
        + SYNTAX_WEIGHT * f64::from(syntax)
        + TENSE_WEIGHT * f64::from(tense);
    let overall = (weighted.round() as u8).clamp(1, 5);

    DifficultyBreakdown {
        length,
        vocabulary,
        syntax,
        tense,
        overall,
    }
}

fn length_score(word_count: usize) -> u8 {
    match word_count {
        0..=5 => 1,
        6..=10 => 2,
        11..=15 => 3,
        16..=20 => 4,
        _ => 5,
    }
}

fn vocabulary_score(words: &[&str]) -> u8 {
    if words.is_empty() {
        return 1;
    }
    let total: usize = words
        .iter()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).count())
        .sum();
    let average = total as f64 / words.len() as f64;
    if average <= 3.0 {
        1
    } else if average <= 4.0 {
        2
    } else if average <= 5.0 {
        3
    } else if average <= 6.0 {
        4
    } else {
        5
    }
}

fn syntax_score(words: &[&str]) -> u8 {
    let hits = words
        .iter()
        .filter(|w| {
            let clean: String = w
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect::<String>()
                .to_ascii_lowercase();
            CONNECTIVES.contains(&clean.as_str())
        })
        .count();
    match hits {
        0 => 1,
        1 => 2,
        2 => 3,
        3 => 4,
        _ => 5,
    }
}

fn tense_score(sentence: &str) -> u8 {
    let past = PAST_MARKERS.find_iter(sentence).count() as f64;
    let perfect = PERFECT_MARKERS.find_iter(sentence).count() as f64;
    let continuous = CONTINUOUS_MARKERS.find_iter(sentence).count() as f64;
    let weighted = past + 1.5 * perfect + continuous;

    if weighted == 0.0 {
        1
    } else if weighted <= 1.0 {
        2
    } else if weighted <= 2.0 {
        3
    } else if weighted <= 3.0 {
        4
    } else {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_present_sentence_scores_one() {
        assert_eq!(score_difficulty("I am a student."), 1);
    }

    #[test]
    fn long_subordinated_sentence_scores_high() {
        let sentence = "Although the committee had been deliberating for several hours, \
                        the chairman, who had repeatedly requested additional documentation, \
                        decided that the proposal which they were considering should be postponed.";
        assert!(score_difficulty(sentence) >= 4);
    }

    #[test]
    fn length_sub_score_is_monotonic_in_word_count() {
        let mut previous = 0;
        for n in 1..=30 {
            let sentence = vec!["cat"; n].join(" ");
            let breakdown = difficulty_breakdown(&sentence);
            assert!(breakdown.length >= previous);
            previous = breakdown.length;
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(length_score(5), 1);
        assert_eq!(length_score(6), 2);
        assert_eq!(length_score(10), 2);
        assert_eq!(length_score(11), 3);
        assert_eq!(length_score(15), 3);
        assert_eq!(length_score(16), 4);
        assert_eq!(length_score(20), 4);
        assert_eq!(length_score(21), 5);
    }

    #[test]
    fn connectives_raise_syntax_score() {
        let plain = difficulty_breakdown("The dog barked loudly.");
        let chained =
            difficulty_breakdown("The dog barked because the cat hissed and the door slammed.");
        assert!(chained.syntax > plain.syntax);
    }

    #[test]
    fn perfect_tense_counts_heavier_than_plain_past() {
        let past = difficulty_breakdown("He walked home.");
        let perfect = difficulty_breakdown("He has walked home and had eaten dinner.");
        assert!(perfect.tense > past.tense);
    }

    #[test]
    fn overall_stays_in_range() {
        for sentence in ["", "Go.", "I have been working all day while she was reading."] {
            let overall = score_difficulty(sentence);
            assert!((1..=5).contains(&overall));
        }
    }
}
