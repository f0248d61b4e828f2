//! Regex-based spam signal.
//!
//! Each configured pattern contributes at most once (a hit anywhere in the text),
//! and every hit is worth 30 points, capped at 100.

use serde::{Deserialize, Serialize};

use crate::config::CompiledPatterns;

const POINTS_PER_PATTERN: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamResult {
    pub is_spam: bool,
    /// In [0, 100].
    pub spam_score: f64,
    pub patterns_matched: usize,
    /// Ids of the matching patterns, in configuration order.
    pub matched_pattern_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SpamAnalyzer {
    patterns: CompiledPatterns,
}

impl SpamAnalyzer {
    pub fn new(patterns: CompiledPatterns) -> Self {
        Self { patterns }
    }

    pub fn analyze(&self, text: &str) -> SpamResult {
        let matched_pattern_ids: Vec<String> = self
            .patterns
            .iter()
            .filter(|p| p.re.is_match(text))
            .map(|p| p.id.clone())
            .collect();
        let n = matched_pattern_ids.len();

        SpamResult {
            is_spam: n > 0,
            spam_score: (n as f64 * POINTS_PER_PATTERN).min(100.0),
            patterns_matched: n,
            matched_pattern_ids,
        }
    }
}
