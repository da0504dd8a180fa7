//! Additive rule-based match scoring.
//!
//! Every rule fires independently and contributes a fixed number of points
//! plus one human-readable reason phrase. Unparseable fields never fail a
//! request: the affected rule simply does not fire. The final score is
//! clamped to [`MAX_SCORE`] and the reasons are truncated to the first
//! [`MAX_REASONS`] in firing order.

use crate::models::{Movie, PreferenceSet};

pub const GENRE_MATCH_POINTS: u32 = 20;
pub const MOOD_MATCH_POINTS: u32 = 15;
pub const ERA_MATCH_POINTS: u32 = 20;
pub const AUDIENCE_MATCH_POINTS: u32 = 10;
pub const EXCELLENT_RATING_BONUS: u32 = 10;
pub const STRONG_RATING_BONUS: u32 = 5;
pub const POPULARITY_BONUS: u32 = 5;

pub const EXCELLENT_RATING_FLOOR: f64 = 8.0;
pub const STRONG_RATING_FLOOR: f64 = 7.0;
pub const POPULARITY_VOTE_FLOOR: i64 = 100_000;

pub const MAX_SCORE: u32 = 100;
pub const MAX_REASONS: usize = 3;

const FEEL_GOOD_PLOT_WORDS: &[&str] = &["inspiring", "uplifting", "heartwarming"];
const DARK_PLOT_WORDS: &[&str] = &["dark", "crime", "murder", "death"];
const MIND_BENDING_PLOT_WORDS: &[&str] = &["twist", "mystery", "complex"];

/// Scores one movie against a preference set.
///
/// Returns the clamped score and the joined reason string. Pure: the same
/// inputs always produce the same output.
pub fn score_movie(movie: &Movie, preferences: &PreferenceSet) -> (u32, String) {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    let movie_genre = movie.genre.to_lowercase();
    let movie_plot = movie.plot.to_lowercase();
    let movie_rated = movie.rated.to_lowercase();
    let movie_year = movie.year_number();

    for genre in &preferences.genres {
        if movie_genre.contains(genre.as_str()) {
            score += GENRE_MATCH_POINTS;
            reasons.push(format!("matches your {genre} preference"));
        }
    }

    for mood in &preferences.moods {
        let (plot_words, reason) = match mood.as_str() {
            "feel-good" => (FEEL_GOOD_PLOT_WORDS, "has an uplifting story"),
            "dark" => (DARK_PLOT_WORDS, "has a dark, intense atmosphere"),
            "mind-bending" => (MIND_BENDING_PLOT_WORDS, "features complex storytelling"),
            _ => continue,
        };
        if plot_words.iter().any(|w| movie_plot.contains(w)) {
            score += MOOD_MATCH_POINTS;
            reasons.push(reason.to_string());
        }
    }

    // An unparseable year falls back to 0, which still satisfies the
    // "classic" comparison. That matches the reference behavior.
    for era in &preferences.eras {
        let (in_range, reason) = match era.as_str() {
            "classic" => (movie_year < 1980, "is a classic film"),
            "80s" => ((1980..1990).contains(&movie_year), "is from the beloved 80s era"),
            "90s" => ((1990..2000).contains(&movie_year), "captures the 90s spirit"),
            "modern" => (movie_year > 2010, "is a modern film with contemporary themes"),
            _ => continue,
        };
        if in_range {
            score += ERA_MATCH_POINTS;
            reasons.push(reason.to_string());
        }
    }

    for rating_pref in &preferences.ratings {
        let (matched, reason) = match rating_pref.as_str() {
            "family" => (
                matches!(movie_rated.as_str(), "g" | "pg" | "pg-13"),
                "is family-friendly",
            ),
            "mature" => (
                matches!(movie_rated.as_str(), "r" | "nc-17"),
                "has mature themes",
            ),
            _ => continue,
        };
        if matched {
            score += AUDIENCE_MATCH_POINTS;
            reasons.push(reason.to_string());
        }
    }

    if let Some(imdb_rating) = movie.rating_value() {
        if imdb_rating >= EXCELLENT_RATING_FLOOR {
            score += EXCELLENT_RATING_BONUS;
            reasons.push(format!("has an excellent IMDB rating of {imdb_rating}"));
        } else if imdb_rating >= STRONG_RATING_FLOOR {
            score += STRONG_RATING_BONUS;
            reasons.push(format!("has a strong IMDB rating of {imdb_rating}"));
        }
    }

    if movie.vote_count().is_some_and(|votes| votes > POPULARITY_VOTE_FLOOR) {
        score += POPULARITY_BONUS;
        reasons.push("is widely acclaimed".to_string());
    }

    reasons.truncate(MAX_REASONS);
    (score.min(MAX_SCORE), reasons.join("; "))
}
