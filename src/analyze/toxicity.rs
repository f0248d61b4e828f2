//! Toxic-word density.
//!
//! Matching is plain substring containment on the lower-cased text, so
//! "stupidity" counts as "stupid". This favours recall and is a known source of
//! false positives (e.g. "skill" contains "kill").

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToxicityResult {
    pub is_toxic: bool,
    /// Percentage in [0, 100].
    pub toxicity_score: f64,
    pub toxic_words_found: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct ToxicityAnalyzer {
    words: BTreeSet<String>,
}

impl ToxicityAnalyzer {
    /// `words` are expected lower-case; see [`crate::config::ModerationConfig::toxic_words`].
    pub fn new(words: BTreeSet<String>) -> Self {
        Self { words }
    }

    pub fn analyze(&self, text: &str) -> ToxicityResult {
        let lower = text.to_lowercase();
        let found: BTreeSet<String> = self
            .words
            .iter()
            .filter(|w| lower.contains(w.as_str()))
            .cloned()
            .collect();

        // Word count comes from the original text, not the lower-cased copy.
        let word_count = text.split_whitespace().count().max(1);
        let density = found.len() as f64 / word_count as f64;

        ToxicityResult {
            is_toxic: !found.is_empty(),
            toxicity_score: (density * 100.0).min(100.0),
            toxic_words_found: found,
        }
    }
}
