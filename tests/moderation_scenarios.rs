// tests/moderation_scenarios.rs
//
// End-to-end behaviour of `ContentModerator::moderate` with the built-in seed lists.

use content_moderator::analyze::Recommendation;
use content_moderator::sentiment::Sentiment;
use content_moderator::{ContentModerator, ModerationError};

fn moderator() -> ContentModerator {
    ContentModerator::seed().expect("seed config compiles")
}

const CORPUS: &[&str] = &[
    "I hate this, it's stupid garbage",
    "Buy now!!! $$$ http://a.co http://b.co http://c.co",
    "This is a wonderful, delightful day",
    "The meeting moved to Thursday.",
    "hate",
    "kill kill kill",
    "Click here 💰 https://x.io https://y.io https://z.io you pathetic idiot",
    "not bad at all, really nice work",
    "stupidity is not a skill",
    "ok",
];

#[test]
fn toxic_scenario() {
    let r = moderator().moderate("I hate this, it's stupid garbage").unwrap();
    for w in ["hate", "stupid", "garbage"] {
        assert!(r.toxicity.toxic_words_found.contains(w), "missing {w}");
    }
    assert!(r.toxicity.is_toxic);
    assert!(r.toxicity.toxicity_score > 0.0);
    assert_eq!(r.sentiment.sentiment, Sentiment::Negative);
}

#[test]
fn spam_scenario() {
    let r = moderator()
        .moderate("Buy now!!! $$$ http://a.co http://b.co http://c.co")
        .unwrap();
    assert!(r.spam.is_spam);
    assert!(r.spam.patterns_matched >= 2);
    assert_eq!(r.spam.spam_score, 90.0);
    // 100 - 0.4 * 90
    assert_eq!(r.safety_score, 64.0);
    assert_eq!(r.recommendation, Recommendation::Review);
}

#[test]
fn positive_scenario() {
    let r = moderator()
        .moderate("This is a wonderful, delightful day")
        .unwrap();
    assert_eq!(r.sentiment.sentiment, Sentiment::Positive);
    assert!(r.sentiment.polarity > 0.1);
    assert!(r.safe);
    assert_eq!(r.recommendation, Recommendation::Approve);
}

#[test]
fn empty_scenario() {
    assert!(matches!(
        moderator().moderate(""),
        Err(ModerationError::EmptyText)
    ));
    assert!(matches!(
        moderator().moderate("  \t\n"),
        Err(ModerationError::EmptyText)
    ));
}

#[test]
fn scores_stay_in_range_and_flags_agree() {
    let m = moderator();
    for text in CORPUS {
        let r = m.moderate(text).unwrap();
        assert!((0.0..=100.0).contains(&r.toxicity.toxicity_score), "{text}");
        assert!((0.0..=100.0).contains(&r.spam.spam_score), "{text}");
        assert!((-1.0..=1.0).contains(&r.sentiment.polarity), "{text}");
        assert!((0.0..=1.0).contains(&r.sentiment.subjectivity), "{text}");
        assert_eq!(
            r.toxicity.is_toxic,
            !r.toxicity.toxic_words_found.is_empty(),
            "{text}"
        );
        assert_eq!(r.spam.is_spam, r.spam.patterns_matched > 0, "{text}");
        assert_eq!(r.spam.patterns_matched, r.spam.matched_pattern_ids.len());
        assert_eq!(r.safe, r.recommendation == Recommendation::Approve, "{text}");
        assert_eq!(r.text, *text);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let m = moderator();
    for text in CORPUS {
        assert_eq!(m.moderate(text).unwrap(), m.moderate(text).unwrap());
    }
}

#[test]
fn concurrent_calls_share_one_moderator() {
    let m = std::sync::Arc::new(moderator());
    let expected: Vec<_> = CORPUS.iter().map(|t| m.moderate(t).unwrap()).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let m = m.clone();
            std::thread::spawn(move || {
                CORPUS
                    .iter()
                    .map(|t| m.moderate(t).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn half_cent_scores_round_to_even() {
    // one toxic word in 32 tokens: toxicity 3.125, safety 98.125
    let text = format!("hate{}", " ok".repeat(31));
    let r = moderator().moderate(&text).unwrap();
    assert_eq!(r.toxicity.toxicity_score, 3.125);
    assert_eq!(r.safety_score, 98.12);
    assert_eq!(r.recommendation, Recommendation::Approve);
}

#[test]
fn substring_matching_is_preserved() {
    // "skill" contains "kill": a known false positive of substring matching
    let r = moderator().moderate("stupidity is not a skill").unwrap();
    assert!(r.toxicity.toxic_words_found.contains("stupid"));
    assert!(r.toxicity.toxic_words_found.contains("kill"));
}

#[test]
fn mixed_abuse_scores_match_formula() {
    let r = moderator().moderate("kill kill kill").unwrap();
    // one distinct word over three tokens
    assert!((r.toxicity.toxicity_score - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(r.safety_score, 80.0);

    let r = moderator()
        .moderate("Click here 💰 https://x.io https://y.io https://z.io you pathetic idiot")
        .unwrap();
    assert_eq!(r.spam.patterns_matched, 3);
    // 2 toxic words over 9 tokens
    let tox = 2.0 / 9.0 * 100.0;
    assert!((r.toxicity.toxicity_score - tox).abs() < 1e-9);
    let expected = ((100.0 - (tox * 0.6 + 90.0 * 0.4)) * 100.0_f64).round_ties_even() / 100.0;
    assert_eq!(r.safety_score, expected);
    assert_eq!(r.recommendation, Recommendation::Review);
}
