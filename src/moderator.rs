//! # Moderation Engine
//! Pure, testable logic that maps `text` → [`ModerationResult`].
//! No I/O; word lists and patterns are injected at construction.
//!
//! Policy: toxicity (60%) and spam (40%) drive the safety score; sentiment is
//! reported alongside but never changes the verdict.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::analyze::scoring::{self, Recommendation};
use crate::analyze::spam::{SpamAnalyzer, SpamResult};
use crate::analyze::toxicity::{ToxicityAnalyzer, ToxicityResult};
use crate::config::{CompiledPatterns, ModerationConfig, SentimentFailurePolicy};
use crate::error::{ConfigError, ModerationError, SentimentError};
use crate::logging::anon_hash;
use crate::metrics;
use crate::sentiment::{LexiconBackend, SentimentAnalyzer, SentimentBackend, SentimentResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationResult {
    pub text: String,
    pub safe: bool,
    /// 100 minus the weighted toxicity/spam penalty, two decimals. May be negative.
    pub safety_score: f64,
    pub toxicity: ToxicityResult,
    pub spam: SpamResult,
    pub sentiment: SentimentResult,
    pub recommendation: Recommendation,
    /// Set when the sentiment backend failed and a neutral placeholder was used.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sentiment_degraded: bool,
}

/// Holds the three analyzers; cheap to share behind an `Arc`, no interior mutability.
#[derive(Debug, Clone)]
pub struct ContentModerator {
    toxicity: ToxicityAnalyzer,
    spam: SpamAnalyzer,
    sentiment: SentimentAnalyzer,
    on_sentiment_failure: SentimentFailurePolicy,
}

impl ContentModerator {
    /// Build with the lexicon sentiment backend. Pattern compilation happens here,
    /// so a bad regex fails startup rather than a request.
    pub fn from_config(cfg: &ModerationConfig) -> Result<Self, ConfigError> {
        Self::with_sentiment_backend(cfg, Arc::new(LexiconBackend::new()))
    }

    pub fn with_sentiment_backend(
        cfg: &ModerationConfig,
        backend: Arc<dyn SentimentBackend>,
    ) -> Result<Self, ConfigError> {
        let patterns = CompiledPatterns::compile(&cfg.spam.patterns)?;
        Ok(Self {
            toxicity: ToxicityAnalyzer::new(cfg.toxic_words()),
            spam: SpamAnalyzer::new(patterns),
            sentiment: SentimentAnalyzer::new(backend),
            on_sentiment_failure: cfg.sentiment.on_failure,
        })
    }

    /// Built-in word list and patterns.
    pub fn seed() -> Result<Self, ConfigError> {
        Self::from_config(&ModerationConfig::default_seed())
    }

    pub fn analyze_toxicity(&self, text: &str) -> ToxicityResult {
        self.toxicity.analyze(text)
    }

    pub fn analyze_spam(&self, text: &str) -> SpamResult {
        self.spam.analyze(text)
    }

    pub fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        self.sentiment.analyze(text)
    }

    pub fn sentiment_failure_policy(&self) -> SentimentFailurePolicy {
        self.on_sentiment_failure
    }

    pub fn moderate(&self, text: &str) -> Result<ModerationResult, ModerationError> {
        if text.trim().is_empty() {
            metrics::record_rejected_input();
            return Err(ModerationError::EmptyText);
        }

        let started = Instant::now();
        let id = anon_hash(text);

        let toxicity = self.analyze_toxicity(text);
        let spam = self.analyze_spam(text);
        let (sentiment, sentiment_degraded) = match self.analyze_sentiment(text) {
            Ok(s) => (s, false),
            Err(e) => match self.on_sentiment_failure {
                SentimentFailurePolicy::Neutral => {
                    warn!(
                        target: "moderation",
                        %id,
                        backend = self.sentiment.backend_name(),
                        error = %e,
                        "sentiment unavailable, using neutral placeholder"
                    );
                    metrics::record_sentiment_fallback();
                    (SentimentResult::neutral(), true)
                }
                SentimentFailurePolicy::Fail => {
                    warn!(target: "moderation", %id, error = %e, "sentiment unavailable");
                    return Err(ModerationError::SentimentUnavailable(e));
                }
            },
        };

        let safety_score = scoring::safety_score(toxicity.toxicity_score, spam.spam_score);
        let recommendation = Recommendation::from_score(safety_score);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        metrics::record_scored(recommendation, elapsed_ms);
        debug!(
            target: "moderation",
            %id,
            safety_score,
            toxicity = toxicity.toxicity_score,
            spam = spam.spam_score,
            recommendation = recommendation.as_str(),
            "text moderated"
        );

        Ok(ModerationResult {
            text: text.to_string(),
            safe: scoring::is_safe(safety_score),
            safety_score,
            toxicity,
            spam,
            sentiment,
            recommendation,
            sentiment_degraded,
        })
    }
}
