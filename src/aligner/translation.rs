// aligner/translation.rs
use anyhow::Result;
use log::debug;

use crate::segmenter::Lang;

/// Port for the machine-translation fallback. Production deployments are
/// expected to plug in a real backend; the default [`TruncationTranslator`]
/// only produces a marked stand-in string.
pub trait TranslationProvider: Send + Sync {
    /// Translates `text` into the target language.
    fn translate(&self, text: &str, target: Lang) -> Result<String>;
}

/// Stand-in provider: returns a marked, truncated prefix of the source
/// sentence instead of a translation. Pairs built from it carry a low
/// confidence so callers can filter them out.
#[derive(Debug, Clone)]
pub struct TruncationTranslator {
    pub max_prefix_chars: usize,
}

impl Default for TruncationTranslator {
    fn default() -> Self {
        Self {
            max_prefix_chars: 20,
        }
    }
}

impl TranslationProvider for TruncationTranslator {
    fn translate(&self, text: &str, target: Lang) -> Result<String> {
        let prefix: String = text.chars().take(self.max_prefix_chars).collect();
        let marked = if text.chars().count() > self.max_prefix_chars {
            format!("[auto] {}…", prefix)
        } else {
            format!("[auto] {}", prefix)
        };
        debug!("stand-in translation into {:?}: {}", target, marked);
        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_marked_but_not_truncated() {
        let t = TruncationTranslator::default();
        let out = t.translate("你好", Lang::En).unwrap();
        assert_eq!(out, "[auto] 你好");
    }

    #[test]
    fn long_input_is_truncated_by_chars() {
        let t = TruncationTranslator { max_prefix_chars: 5 };
        let out = t.translate("This sentence is long.", Lang::Zh).unwrap();
        assert_eq!(out, "[auto] This …");
    }
}
