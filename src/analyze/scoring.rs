//! Safety score and recommendation bands.
//!
//! safety = 100 - (0.6 * toxicity + 0.4 * spam), rounded to two decimals.
//! The score is not clamped: text that is both fully toxic and fully spammy can go
//! below zero.

use serde::{Deserialize, Serialize};

pub const TOXICITY_WEIGHT: f64 = 0.6;
pub const SPAM_WEIGHT: f64 = 0.4;

/// Scores strictly above this are approved (and `safe`).
pub const APPROVE_ABOVE: f64 = 70.0;
/// Scores strictly above this (and not approved) go to review; the rest are rejected.
pub const REVIEW_ABOVE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Approve,
    Review,
    Reject,
}

impl Recommendation {
    /// `> 70` approve, `(40, 70]` review, `<= 40` reject.
    pub fn from_score(safety_score: f64) -> Self {
        if safety_score > APPROVE_ABOVE {
            Recommendation::Approve
        } else if safety_score > REVIEW_ABOVE {
            Recommendation::Review
        } else {
            Recommendation::Reject
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Review => "review",
            Recommendation::Reject => "reject",
        }
    }
}

pub fn safety_score(toxicity_score: f64, spam_score: f64) -> f64 {
    round2(100.0 - (toxicity_score * TOXICITY_WEIGHT + spam_score * SPAM_WEIGHT))
}

pub fn is_safe(safety_score: f64) -> bool {
    safety_score > APPROVE_ABOVE
}

/// Halves go to the even neighbour (98.125 -> 98.12).
fn round2(x: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0
    (x * 100.0).round_ties_even() / 100.0 + 0.0
}
