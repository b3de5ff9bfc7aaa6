// aligner/mod.rs
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::segmenter::{Lang, segment};

pub mod translation;

pub use translation::{TranslationProvider, TruncationTranslator};

/// One aligned English/Chinese sentence pair. `confidence` is always within
/// [0, 1]; 0.9 means an exact one-to-one match, lower values mark merged or
/// mismatched pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentencePair {
    pub english: String,
    pub chinese: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignMethod {
    LengthBased,
    Semantic,
    Neural,
    Hybrid,
}

/// How to resolve sentences left unmatched after the cursor walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackStrategy {
    Skip,
    MachineTranslation,
    Placeholder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentOptions {
    pub method: AlignMethod,
    pub min_confidence: f64,
    pub fallback_strategy: FallbackStrategy,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            method: AlignMethod::LengthBased,
            min_confidence: 0.7,
            fallback_strategy: FallbackStrategy::Skip,
        }
    }
}

const EXACT_MATCH_CONFIDENCE: f64 = 0.9;
const MERGED_CONFIDENCE: f64 = 0.6;
const MISMATCH_CONFIDENCE: f64 = 0.5;
const MACHINE_TRANSLATION_CONFIDENCE: f64 = 0.4;
const PLACEHOLDER_CONFIDENCE: f64 = 0.1;

const RATIO_MIN: f64 = 0.5;
const RATIO_MAX: f64 = 2.5;

const MISSING_PARTNER_ZH: &str = "[未对齐]";
const MISSING_PARTNER_EN: &str = "[unaligned]";

/// Length-ratio sentence aligner with a pluggable translation fallback.
pub struct Aligner {
    provider: Box<dyn TranslationProvider>,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new()
    }
}

impl Aligner {
    pub fn new() -> Self {
        Self {
            provider: Box::new(TruncationTranslator::default()),
        }
    }

    pub fn with_provider(provider: Box<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Aligns the segmented sentences of both texts into best-effort pairs.
    /// The relative order of both inputs is always preserved, and every pair
    /// below `options.min_confidence` is dropped from the final output.
    pub fn align(
        &self,
        english_text: &str,
        chinese_text: &str,
        options: &AlignmentOptions,
    ) -> Vec<SentencePair> {
        let english = segment(english_text, Lang::En);
        let chinese = segment(chinese_text, Lang::Zh);
        debug!(
            "aligning {} english / {} chinese sentences ({:?})",
            english.len(),
            chinese.len(),
            options.method
        );

        let mut pairs = if english.len() == chinese.len() {
            // Matching counts already carry the strongest signal we have.
            english
                .iter()
                .zip(chinese.iter())
                .map(|(e, c)| SentencePair {
                    english: e.clone(),
                    chinese: c.clone(),
                    confidence: EXACT_MATCH_CONFIDENCE,
                })
                .collect()
        } else {
            self.walk(&english, &chinese, options)
        };

        pairs.retain(|p| p.confidence >= options.min_confidence);
        pairs
    }

    fn walk(
        &self,
        english: &[String],
        chinese: &[String],
        options: &AlignmentOptions,
    ) -> Vec<SentencePair> {
        let mut pairs = Vec::with_capacity(english.len().max(chinese.len()));
        let (mut i, mut j) = (0usize, 0usize);

        while i < english.len() && j < chinese.len() {
            let ratio = char_len(&english[i]) as f64 / char_len(&chinese[j]) as f64;

            if (RATIO_MIN..=RATIO_MAX).contains(&ratio) {
                pairs.push(SentencePair {
                    english: english[i].clone(),
                    chinese: chinese[j].clone(),
                    confidence: ratio_confidence(ratio),
                });
                i += 1;
                j += 1;
            } else if ratio < RATIO_MIN {
                // Chinese side relatively long: try folding in the next
                // English sentence before settling for a mismatch.
                if i + 1 < english.len() {
                    let merged = format!("{} {}", english[i], english[i + 1]);
                    let merged_ratio = char_len(&merged) as f64 / char_len(&chinese[j]) as f64;
                    if (RATIO_MIN..=RATIO_MAX).contains(&merged_ratio) {
                        pairs.push(SentencePair {
                            english: merged,
                            chinese: chinese[j].clone(),
                            confidence: MERGED_CONFIDENCE,
                        });
                        i += 2;
                        j += 1;
                        continue;
                    }
                }
                pairs.push(SentencePair {
                    english: english[i].clone(),
                    chinese: chinese[j].clone(),
                    confidence: MISMATCH_CONFIDENCE,
                });
                i += 1;
                j += 1;
            } else {
                // English side relatively long: symmetric merge on Chinese.
                if j + 1 < chinese.len() {
                    let merged = format!("{}{}", chinese[j], chinese[j + 1]);
                    let merged_ratio = char_len(&english[i]) as f64 / char_len(&merged) as f64;
                    if (RATIO_MIN..=RATIO_MAX).contains(&merged_ratio) {
                        pairs.push(SentencePair {
                            english: english[i].clone(),
                            chinese: merged,
                            confidence: MERGED_CONFIDENCE,
                        });
                        i += 1;
                        j += 2;
                        continue;
                    }
                }
                pairs.push(SentencePair {
                    english: english[i].clone(),
                    chinese: chinese[j].clone(),
                    confidence: MISMATCH_CONFIDENCE,
                });
                i += 1;
                j += 1;
            }
        }

        self.resolve_leftovers(&english[i..], &chinese[j..], options, &mut pairs);
        pairs
    }

    fn resolve_leftovers(
        &self,
        english: &[String],
        chinese: &[String],
        options: &AlignmentOptions,
        pairs: &mut Vec<SentencePair>,
    ) {
        if english.is_empty() && chinese.is_empty() {
            return;
        }

        match options.fallback_strategy {
            FallbackStrategy::Skip => {
                debug!(
                    "dropping {} english / {} chinese unmatched sentences",
                    english.len(),
                    chinese.len()
                );
            }
            FallbackStrategy::Placeholder => {
                for e in english {
                    pairs.push(SentencePair {
                        english: e.clone(),
                        chinese: MISSING_PARTNER_ZH.to_string(),
                        confidence: PLACEHOLDER_CONFIDENCE,
                    });
                }
                for c in chinese {
                    pairs.push(SentencePair {
                        english: MISSING_PARTNER_EN.to_string(),
                        chinese: c.clone(),
                        confidence: PLACEHOLDER_CONFIDENCE,
                    });
                }
            }
            FallbackStrategy::MachineTranslation => {
                for e in english {
                    let pair = match self.provider.translate(e, Lang::Zh) {
                        Ok(translated) => SentencePair {
                            english: e.clone(),
                            chinese: translated,
                            confidence: MACHINE_TRANSLATION_CONFIDENCE,
                        },
                        Err(err) => {
                            warn!("translation provider failed for {:?}: {}", e, err);
                            SentencePair {
                                english: e.clone(),
                                chinese: MISSING_PARTNER_ZH.to_string(),
                                confidence: PLACEHOLDER_CONFIDENCE,
                            }
                        }
                    };
                    pairs.push(pair);
                }
                for c in chinese {
                    let pair = match self.provider.translate(c, Lang::En) {
                        Ok(translated) => SentencePair {
                            english: translated,
                            chinese: c.clone(),
                            confidence: MACHINE_TRANSLATION_CONFIDENCE,
                        },
                        Err(err) => {
                            warn!("translation provider failed for {:?}: {}", c, err);
                            SentencePair {
                                english: MISSING_PARTNER_EN.to_string(),
                                chinese: c.clone(),
                                confidence: PLACEHOLDER_CONFIDENCE,
                            }
                        }
                    };
                    pairs.push(pair);
                }
            }
        }
    }
}

/// Aligns with the default stand-in translation provider.
pub fn align(
    english_text: &str,
    chinese_text: &str,
    options: &AlignmentOptions,
) -> Vec<SentencePair> {
    Aligner::new().align(english_text, chinese_text, options)
}

// Rewards length ratios closer to 1. Stays within [0.75, 0.9] for ratios
// inside the accept window.
fn ratio_confidence(ratio: f64) -> f64 {
    0.7 + (1.0 - (1.0 - ratio).abs() / 2.0) * 0.2
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive(fallback: FallbackStrategy) -> AlignmentOptions {
        AlignmentOptions {
            method: AlignMethod::Hybrid,
            min_confidence: 0.0,
            fallback_strategy: fallback,
        }
    }

    #[test]
    fn equal_counts_pair_indexwise() {
        let pairs = align(
            "Hello. How are you?",
            "你好。你好吗？",
            &AlignmentOptions::default(),
        );
        assert_eq!(pairs.len(), 2);
        for pair in &pairs {
            assert_eq!(pair.confidence, 0.9);
        }
        assert_eq!(pairs[0].english, "Hello");
        assert_eq!(pairs[0].chinese, "你好");
        assert_eq!(pairs[1].english, "How are you");
        assert_eq!(pairs[1].chinese, "你好吗");
    }

    #[test]
    fn skip_drops_unmatched_suffix() {
        let options = AlignmentOptions {
            min_confidence: 0.5,
            ..AlignmentOptions::default()
        };
        let pairs = align("A. B. C.", "甲。", &options);
        assert!(pairs.len() <= 1);
        assert_eq!(pairs[0].english, "A");
        assert_eq!(pairs[0].chinese, "甲");
    }

    #[test]
    fn english_merge_when_chinese_side_long() {
        // 2 chars against 8: ratio 0.25, merged "Hi Go now" gives 9/8.
        let pairs = align(
            "Hi. Go now.",
            "你好你好你好你好。",
            &permissive(FallbackStrategy::Skip),
        );
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].english, "Hi Go now");
        assert_eq!(pairs[0].confidence, 0.6);
    }

    #[test]
    fn chinese_merge_when_english_side_long() {
        // 24 chars against 6: ratio 4.0, merged Chinese gives 24/12.
        let pairs = align(
            "This is quite a long one.",
            "这个句子很长。这里还有一些。",
            &permissive(FallbackStrategy::Skip),
        );
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].chinese, "这个句子很长这里还有一些");
        assert_eq!(pairs[0].confidence, 0.6);
    }

    #[test]
    fn placeholder_fallback_emits_low_confidence_pairs() {
        let pairs = align(
            "One. Two. Three.",
            "一。",
            &permissive(FallbackStrategy::Placeholder),
        );
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].chinese, "[未对齐]");
        assert_eq!(pairs[1].confidence, 0.1);
        assert_eq!(pairs[2].chinese, "[未对齐]");
    }

    #[test]
    fn machine_translation_fallback_uses_stub() {
        let pairs = align(
            "One. Two.",
            "一。",
            &permissive(FallbackStrategy::MachineTranslation),
        );
        assert_eq!(pairs.len(), 2);
        assert!(pairs[1].chinese.starts_with("[auto] "));
        assert_eq!(pairs[1].confidence, 0.4);
    }

    #[test]
    fn min_confidence_filters_uniformly() {
        let options = AlignmentOptions {
            min_confidence: 0.95,
            ..AlignmentOptions::default()
        };
        // Equal counts would pair at 0.9, still below the threshold.
        let pairs = align("Hello.", "你好。", &options);
        assert!(pairs.is_empty());
    }

    #[test]
    fn confidence_always_within_bounds() {
        let texts = [
            ("Hello. How are you? I am fine.", "你好。你好吗？"),
            ("A tiny one.", "这是一个非常非常非常长的中文句子。"),
            ("", "你好。"),
        ];
        for (en, zh) in texts {
            for fallback in [
                FallbackStrategy::Skip,
                FallbackStrategy::Placeholder,
                FallbackStrategy::MachineTranslation,
            ] {
                for pair in align(en, zh, &permissive(fallback)) {
                    assert!((0.0..=1.0).contains(&pair.confidence));
                }
            }
        }
    }

    #[test]
    fn output_preserves_input_order() {
        let en = "First sentence here. Second one follows. Third comes after. Fourth ends it.";
        let zh = "第一句在这里。第二句紧随其后。第三句在后面。";
        let pairs = align(en, zh, &permissive(FallbackStrategy::Placeholder));

        let english_sentences = segment(en, Lang::En);
        let mut last_index = 0;
        for pair in pairs.iter().filter(|p| p.english != "[unaligned]") {
            // The leading original sentence in each pair must advance.
            let first = pair.english.split(". ").next().unwrap();
            let index = english_sentences
                .iter()
                .position(|s| s.starts_with(first))
                .unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn empty_english_side_degenerates_to_fallback() {
        let pairs = align("", "你好。你好吗？", &permissive(FallbackStrategy::Placeholder));
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.english == "[unaligned]"));
    }
}
