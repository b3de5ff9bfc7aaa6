// grammar/mod.rs
use log::debug;
use serde::Serialize;

pub mod patterns;

pub use patterns::{GRAMMAR_PATTERNS, GrammarPattern};

const COORDINATORS: &[&str] = &["and", "but", "or", "so", "yet", "nor"];
const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "since", "unless", "while", "when", "whereas", "if", "that",
    "which", "who", "whom", "whose",
];
const DISCOURSE_CONNECTIVES: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "nevertheless",
    "consequently",
    "meanwhile",
    "otherwise",
    "besides",
    "instead",
];
const AUXILIARIES: &[&str] = &[
    "do", "does", "did", "am", "is", "are", "was", "were", "have", "has", "had", "can", "could",
    "will", "would", "shall", "should", "may", "might", "must",
];
const WH_WORDS: &[&str] = &[
    "what", "where", "when", "why", "who", "whom", "whose", "which", "how",
];
const ARTICLES: &[&str] = &["a", "an", "the"];

/// Tests a sentence against the static grammar catalogue and returns the
/// names of every matching pattern, in catalogue order.
pub fn identify_grammar_points(sentence: &str) -> Vec<&'static str> {
    let points: Vec<&'static str> = GRAMMAR_PATTERNS
        .iter()
        .filter(|p| p.pattern.is_match(sentence).unwrap_or(false))
        .map(|p| p.name)
        .collect();
    debug!("grammar points for {:?}: {:?}", sentence, points);
    points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceKind {
    Simple,
    Compound,
    Complex,
    CompoundComplex,
    YesNoQuestion,
    WhQuestion,
}

/// Coarse per-sentence structure breakdown. The subject/verb/object split is
/// a token heuristic, not a parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceStructureAnalysis {
    pub kind: SentenceKind,
    pub clauses: usize,
    pub subjects: Vec<String>,
    pub verbs: Vec<String>,
    pub objects: Vec<String>,
}

pub fn analyze_structure(sentence: &str) -> SentenceStructureAnalysis {
    let words = word_tokens(sentence);
    let clauses = estimate_clauses(sentence, &words);
    let kind = classify(sentence, &words, clauses);
    let (subjects, verbs, objects) = split_constituents(&words);

    SentenceStructureAnalysis {
        kind,
        clauses,
        subjects,
        verbs,
        objects,
    }
}

/// Rates structural complexity 1 (plain) to 10 from sentence length, clause
/// estimate and discourse connectives.
pub fn complexity_score(sentence: &str) -> u8 {
    let words = word_tokens(sentence);
    let clauses = estimate_clauses(sentence, &words);

    let mut score = 1.0f64;
    if words.len() > 20 {
        score += 2.0;
    } else if words.len() > 10 {
        score += 1.0;
    }
    score += (clauses - 1) as f64;
    let connectives = words
        .iter()
        .filter(|w| DISCOURSE_CONNECTIVES.contains(&w.as_str()))
        .count();
    score += 0.5 * connectives as f64;

    (score.round() as u8).clamp(1, 10)
}

// First match wins: question forms, then coordination/subordination signals,
// then plain subject-verb-object.
fn classify(sentence: &str, words: &[String], clauses: usize) -> SentenceKind {
    if sentence.trim_end().ends_with('?') {
        if let Some(first) = words.first() {
            if AUXILIARIES.contains(&first.as_str()) {
                return SentenceKind::YesNoQuestion;
            }
            if WH_WORDS.contains(&first.as_str()) {
                return SentenceKind::WhQuestion;
            }
        }
    }

    let has_coordinator = words.iter().any(|w| COORDINATORS.contains(&w.as_str()));
    let has_subordinator = words.iter().any(|w| SUBORDINATORS.contains(&w.as_str()));

    match (has_coordinator, has_subordinator) {
        (true, false) => SentenceKind::Compound,
        (false, true) => SentenceKind::Complex,
        (true, true) if clauses >= 3 => SentenceKind::CompoundComplex,
        (true, true) => SentenceKind::Complex,
        (false, false) => SentenceKind::Simple,
    }
}

// One clause for the main verb plus one per connective token, capped by what
// the punctuation could plausibly delimit.
fn estimate_clauses(sentence: &str, words: &[String]) -> usize {
    let connective_hits = words
        .iter()
        .filter(|w| COORDINATORS.contains(&w.as_str()) || SUBORDINATORS.contains(&w.as_str()))
        .count();
    let commas = sentence.matches(',').count();
    let semicolons = sentence.matches(';').count();
    let cap = 1 + commas + semicolons + 1;
    (1 + connective_hits).min(cap)
}

fn word_tokens(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(char::is_ascii_alphabetic)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn looks_like_verb(word: &str) -> bool {
    const COMMON_VERBS: &[&str] = &[
        "go", "goes", "went", "make", "makes", "made", "say", "says", "said", "get", "gets", "got",
        "take", "takes", "took", "see", "sees", "saw", "know", "knows", "knew", "think", "thinks",
        "thought", "want", "wants", "like", "likes", "work", "works", "live", "lives", "study",
        "studies", "be", "been", "being",
    ];
    AUXILIARIES.contains(&word)
        || COMMON_VERBS.contains(&word)
        || word.ends_with("ing")
        || word.ends_with("ed")
}

// Everything before the first verb-looking token is the subject region, the
// verb run itself the predicate head, the remainder the object region.
fn split_constituents(words: &[String]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let Some(first_verb) = words.iter().position(|w| looks_like_verb(w)) else {
        return (words.to_vec(), Vec::new(), Vec::new());
    };

    let subjects: Vec<String> = words[..first_verb]
        .iter()
        .filter(|w| !ARTICLES.contains(&w.as_str()))
        .cloned()
        .collect();

    let mut verbs = Vec::new();
    let mut rest = first_verb;
    while rest < words.len() && looks_like_verb(&words[rest]) {
        verbs.push(words[rest].clone());
        rest += 1;
    }

    let objects: Vec<String> = words[rest..]
        .iter()
        .filter(|w| !ARTICLES.contains(&w.as_str()))
        .cloned()
        .collect();

    (subjects, verbs, objects)
}
