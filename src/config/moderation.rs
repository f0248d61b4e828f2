//! Moderation word/pattern configuration (TOML).
//!
//! ```toml
//! [toxicity]
//! words = ["hate", "stupid"]
//!
//! [[spam.patterns]]
//! id = "promo_phrase"
//! pattern = "(click here|buy now)"
//!
//! [sentiment]
//! on_failure = "neutral"   # or "fail"
//! ```
//!
//! Every section is optional; a missing section falls back to the built-in seed.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::{env, fs, io, path::Path};
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_MODERATION_CONFIG_PATH: &str = "config/moderation.toml";
pub const ENV_MODERATION_CONFIG_PATH: &str = "MODERATION_CONFIG_PATH";

const SEED_TOXIC_WORDS: &[&str] = &[
    "hate",
    "kill",
    "stupid",
    "idiot",
    "dumb",
    "trash",
    "garbage",
    "worst",
    "terrible",
    "awful",
    "disgusting",
    "pathetic",
];

const SEED_SPAM_PATTERNS: &[(&str, &str)] = &[
    ("promo_phrase", r"(click here|buy now|limited offer|act now)"),
    ("money_marker", r"(\$\$\$|💰|🤑)"),
    ("url_burst", r"(?:https?://\S+\s*){3,}"),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationConfig {
    #[serde(default)]
    pub toxicity: ToxicitySection,
    #[serde(default)]
    pub spam: SpamSection,
    #[serde(default)]
    pub sentiment: SentimentSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToxicitySection {
    pub words: Vec<String>,
}

impl Default for ToxicitySection {
    fn default() -> Self {
        Self {
            words: SEED_TOXIC_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpamSection {
    pub patterns: Vec<PatternCfg>,
}

impl Default for SpamSection {
    fn default() -> Self {
        Self {
            patterns: SEED_SPAM_PATTERNS
                .iter()
                .map(|(id, p)| PatternCfg {
                    id: id.to_string(),
                    pattern: p.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternCfg {
    pub id: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SentimentSection {
    #[serde(default)]
    pub on_failure: SentimentFailurePolicy,
}

/// What the moderator does when the sentiment backend cannot score a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFailurePolicy {
    /// Substitute a neutral sentiment and keep the toxicity/spam verdict.
    #[default]
    Neutral,
    /// Fail the whole request.
    Fail,
}

impl ModerationConfig {
    /// Built-in word list and patterns.
    pub fn default_seed() -> Self {
        let mut cfg = Self::default();
        cfg.normalize();
        cfg
    }

    /// Resolve the config path from `MODERATION_CONFIG_PATH` (or the default path).
    /// A missing file yields the seed; a broken file is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var(ENV_MODERATION_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_MODERATION_CONFIG_PATH.to_string());
        match Self::load_from_file(&path) {
            Ok(cfg) => {
                info!(
                    target: "moderation",
                    %path,
                    words = cfg.toxicity.words.len(),
                    patterns = cfg.spam.patterns.len(),
                    "moderation config loaded"
                );
                Ok(cfg)
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!(target: "moderation", %path, "no moderation config file, using built-in seed");
                Ok(Self::default_seed())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let mut cfg: ModerationConfig = toml::from_str(raw)?;
        cfg.normalize();
        Ok(cfg)
    }

    /// Lower-case, trim and de-duplicate the word list (first occurrence wins).
    fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.toxicity.words = self
            .toxicity
            .words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();
    }

    /// The toxic word set as used by the analyzer (already normalized at load).
    pub fn toxic_words(&self) -> BTreeSet<String> {
        self.toxicity.words.iter().cloned().collect()
    }
}

/// A spam pattern compiled for case-insensitive search.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub id: String,
    pub re: Regex,
}

/// Ordered, compiled spam patterns. Read-only after construction.
#[derive(Debug, Clone)]
pub struct CompiledPatterns(Vec<CompiledPattern>);

impl CompiledPatterns {
    pub fn compile(patterns: &[PatternCfg]) -> Result<Self, ConfigError> {
        let mut ids = HashSet::new();
        let mut out = Vec::with_capacity(patterns.len());
        for (pos, p) in patterns.iter().enumerate() {
            let id = p.id.trim();
            if id.is_empty() {
                return Err(ConfigError::EmptyPatternId(pos));
            }
            if !ids.insert(id.to_string()) {
                return Err(ConfigError::DuplicatePatternId(id.to_string()));
            }
            let re = RegexBuilder::new(&p.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::InvalidPattern {
                    id: id.to_string(),
                    source,
                })?;
            out.push(CompiledPattern {
                id: id.to_string(),
                re,
            });
        }
        Ok(Self(out))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
