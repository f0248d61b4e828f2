// src/analyze/mod.rs
//! Per-axis analyzers (toxicity, spam) and the scoring that combines them.

pub mod scoring;
pub mod spam;
pub mod toxicity;

// Re-export convenient types.
pub use crate::analyze::scoring::{safety_score, Recommendation};
pub use crate::analyze::spam::{SpamAnalyzer, SpamResult};
pub use crate::analyze::toxicity::{ToxicityAnalyzer, ToxicityResult};
