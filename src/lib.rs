use log::{debug, info};
use serde::Serialize;

mod aligner;
mod error;
mod grammar;
mod keywords;
mod scoring;
mod segmenter;

pub use aligner::{
    Aligner, AlignmentOptions, AlignMethod, FallbackStrategy, SentencePair, TranslationProvider,
    TruncationTranslator, align,
};
pub use error::BTAError;
pub use grammar::{
    GRAMMAR_PATTERNS, GrammarPattern, SentenceKind, SentenceStructureAnalysis, analyze_structure,
    complexity_score, identify_grammar_points,
};
pub use keywords::{STOP_WORDS, extract_common_phrases, extract_keywords};
pub use scoring::{
    DifficultyBreakdown, ReadabilityMetrics, count_syllables, difficulty_breakdown, readability,
    score_difficulty,
};
pub use segmenter::{Lang, normalize, segment};

const DEFAULT_MAX_KEYWORDS: usize = 5;
const DEFAULT_MIN_PHRASE_OCCURRENCES: usize = 2;

/// One aligned pair plus its per-sentence analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedPair {
    #[serde(flatten)]
    pub pair: SentencePair,
    pub difficulty: u8,
    pub grammar_points: Vec<&'static str>,
    pub structure: SentenceStructureAnalysis,
}

/// Full analysis of one bilingual material: aligned pairs with per-sentence
/// scores plus whole-text metrics over the English side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReport {
    pub pairs: Vec<AnalyzedPair>,
    pub readability: ReadabilityMetrics,
    pub keywords: Vec<String>,
    pub phrases: Vec<String>,
}

/// Runs the whole pipeline over a bilingual material: normalization,
/// alignment, per-pair difficulty/grammar analysis and whole-text metrics.
pub struct MaterialAnalyzer {
    aligner: Aligner,
}

impl Default for MaterialAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialAnalyzer {
    /// Creates an analyzer with the stand-in translation provider.
    pub fn new() -> Self {
        Self {
            aligner: Aligner::new(),
        }
    }

    /// Creates an analyzer with a custom machine-translation backend for the
    /// `machine-translation` fallback strategy.
    pub fn with_provider(provider: Box<dyn TranslationProvider>) -> Self {
        Self {
            aligner: Aligner::with_provider(provider),
        }
    }

    /// Analyzes a bilingual material.
    ///
    /// Errors on empty input; every other degenerate case (no alignable
    /// pairs, one-sided text) produces a well-defined, possibly empty report.
    pub fn analyze(
        &self,
        english_text: &str,
        chinese_text: &str,
        options: &AlignmentOptions,
    ) -> Result<MaterialReport, BTAError> {
        if english_text.trim().is_empty() {
            return Err(BTAError::from("English input text is empty"));
        }
        if chinese_text.trim().is_empty() {
            return Err(BTAError::from("Chinese input text is empty"));
        }

        let english_text = normalize(english_text);
        let chinese_text = normalize(chinese_text);

        let aligned = self.aligner.align(&english_text, &chinese_text, options);
        info!(
            "aligned {} sentence pairs at min confidence {}",
            aligned.len(),
            options.min_confidence
        );

        let pairs = aligned
            .into_iter()
            .map(|pair| {
                let difficulty = score_difficulty(&pair.english);
                let grammar_points = identify_grammar_points(&pair.english);
                let structure = analyze_structure(&pair.english);
                debug!(
                    "pair {:?}: difficulty {}, {} grammar points",
                    pair.english,
                    difficulty,
                    grammar_points.len()
                );
                AnalyzedPair {
                    pair,
                    difficulty,
                    grammar_points,
                    structure,
                }
            })
            .collect();

        Ok(MaterialReport {
            pairs,
            readability: readability(&english_text),
            keywords: extract_keywords(&english_text, DEFAULT_MAX_KEYWORDS),
            phrases: extract_common_phrases(&english_text, DEFAULT_MIN_PHRASE_OCCURRENCES),
        })
    }
}
