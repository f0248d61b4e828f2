//! Sentiment polarity behind a narrow backend trait.
//!
//! [`SentimentAnalyzer`] only buckets a backend's polarity into
//! positive / negative / neutral. The default backend, [`LexiconBackend`], averages
//! per-word polarity and subjectivity from an embedded lexicon.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SentimentError;

/// Polarity above this is positive, below its negation negative.
pub const NEUTRAL_BAND: f64 = 0.1;

/// TextBlob-style negation: flip and halve.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    /// Present only for modifiers ("very", "slightly") that scale the next word.
    #[serde(default)]
    pub intensity: Option<f64>,
}

static LEXICON: Lazy<HashMap<String, LexiconEntry>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, LexiconEntry>>(raw).expect("valid sentiment lexicon")
});

/// Raw backend output: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Anything that can score polarity/subjectivity for a text.
pub trait SentimentBackend: Send + Sync {
    fn polarity(&self, text: &str) -> Result<Polarity, SentimentError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > NEUTRAL_BAND {
            Sentiment::Positive
        } else if polarity < -NEUTRAL_BAND {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// Placeholder used when the backend failed and the policy degrades.
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Clone)]
pub struct SentimentAnalyzer {
    backend: Arc<dyn SentimentBackend>,
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl SentimentAnalyzer {
    pub fn new(backend: Arc<dyn SentimentBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let Polarity {
            polarity,
            subjectivity,
        } = self.backend.polarity(text)?;
        let polarity = polarity.clamp(-1.0, 1.0);
        Ok(SentimentResult {
            sentiment: Sentiment::from_polarity(polarity),
            polarity,
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }
}

/// Lexicon-based scorer.
///
/// Each lexicon word is one assessment. A modifier directly before it scales the
/// assessment by its intensity; a negator within the previous three tokens multiplies
/// polarity by -0.5. The result is the mean over all assessments, or (0, 0) when no
/// word is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconBackend;

impl LexiconBackend {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn entry(&self, w: &str) -> Option<&'static LexiconEntry> {
        LEXICON.get(w)
    }

    fn is_modifier(&self, w: &str) -> bool {
        self.entry(w).is_some_and(|e| e.intensity.is_some())
    }
}

impl SentimentBackend for LexiconBackend {
    fn polarity(&self, text: &str) -> Result<Polarity, SentimentError> {
        if text.contains('\u{FFFD}') {
            return Err(SentimentError::Unprocessable {
                reason: "text contains U+FFFD replacement characters".into(),
            });
        }
        if text.contains('\0') {
            return Err(SentimentError::Unprocessable {
                reason: "text contains NUL bytes".into(),
            });
        }

        let tokens = tokenize(text);
        let mut sum_p = 0.0;
        let mut sum_s = 0.0;
        let mut n = 0usize;

        for (i, tok) in tokens.iter().enumerate() {
            let Some(entry) = self.entry(tok) else {
                continue;
            };
            if entry.intensity.is_some() {
                continue;
            }

            let scale = match i.checked_sub(1).map(|j| tokens[j].as_str()) {
                Some(prev) if self.is_modifier(prev) => {
                    self.entry(prev).and_then(|e| e.intensity).unwrap_or(1.0)
                }
                _ => 1.0,
            };

            let mut p = (entry.polarity * scale).clamp(-1.0, 1.0);
            let s = (entry.subjectivity * scale).clamp(0.0, 1.0);

            let negated = (1..=3).any(|k| i >= k && is_negator(&tokens[i - k]));
            if negated {
                p *= NEGATION_FACTOR;
            }

            sum_p += p;
            sum_s += s;
            n += 1;
        }

        if n == 0 {
            return Ok(Polarity {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        Ok(Polarity {
            polarity: (sum_p / n as f64).clamp(-1.0, 1.0),
            subjectivity: (sum_s / n as f64).clamp(0.0, 1.0),
        })
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Lower-case word tokens; apostrophes stay inside words ("isn't", "it's").
fn tokenize(s: &str) -> Vec<String> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '\u{2019}'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\u{2019}', "'").to_lowercase())
        .collect()
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "nor"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "weren't"
            | "won't"
            | "can't"
            | "cannot"
            | "don't"
            | "doesn't"
            | "didn't"
            | "without"
    )
}
