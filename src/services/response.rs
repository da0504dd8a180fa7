//! Conversational acknowledgment for a set of recommendations.
//!
//! The greeting is picked at random on purpose, so the random source is a
//! parameter: production callers pass `thread_rng()`, tests pass a seeded
//! `StdRng` and get deterministic output.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{PreferenceSet, Recommendation};

const GREETINGS: &[&str] = &[
    "I'd love to help you find the perfect movie! 🎬",
    "Great question! Let me suggest some movies you might enjoy. 🍿",
    "I've got some fantastic recommendations for you! ✨",
];

/// Composes a one-sentence acknowledgment referencing the detected
/// preferences: genres if any, else moods, else a generic clause.
pub fn compose_response<R: Rng + ?Sized>(
    _message: &str,
    _recommendations: &[Recommendation],
    preferences: &PreferenceSet,
    rng: &mut R,
) -> String {
    let greeting = GREETINGS.choose(rng).copied().unwrap_or(GREETINGS[0]);

    let follow_up = if !preferences.genres.is_empty() {
        format!(
            "Based on your interest in {} movies, here are my top picks:",
            preferences.genres.join(", ")
        )
    } else if !preferences.moods.is_empty() {
        format!(
            "I understand you're looking for something {}. Here's what I recommend:",
            preferences.moods.join(", ")
        )
    } else {
        "Here are some excellent movies I think you'll enjoy:".to_string()
    };

    format!("{greeting} {follow_up}")
}
