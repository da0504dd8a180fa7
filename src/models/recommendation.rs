use serde::{Deserialize, Serialize};

use super::Movie;

/// Poster shown when a record has no usable poster reference.
pub const PLACEHOLDER_POSTER: &str = "/static/no-image.png";

/// Display-ready projection of a scored movie.
///
/// Every field is defaulted rather than optional: the client renders these
/// directly, so missing or invalid source data degrades to a readable
/// placeholder instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub genre: String,
    pub plot: String,
    pub poster: String,
    pub imdb_id: String,
    pub why_recommended: String,
    pub match_score: u32,
}

fn non_empty(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl Recommendation {
    /// Builds a recommendation from a scored movie, substituting defaults
    /// for any missing or invalid field.
    pub fn from_scored(movie: &Movie, score: u32, why: &str) -> Self {
        let poster = if movie.poster == "N/A" || movie.poster.trim().is_empty() {
            PLACEHOLDER_POSTER.to_string()
        } else {
            movie.poster.clone()
        };

        Self {
            title: non_empty(&movie.title, "Unknown"),
            year: non_empty(&movie.year, "Unknown"),
            rating: non_empty(&movie.imdb_rating, "N/A"),
            genre: non_empty(&movie.genre, "Unknown"),
            plot: non_empty(&movie.plot, "No plot available"),
            poster,
            imdb_id: movie.imdb_id.clone(),
            why_recommended: non_empty(why, "matches your preferences"),
            match_score: score,
        }
    }
}
