use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie record as it appears in the catalog file.
///
/// Field names follow the upstream OMDB export so existing data files
/// round-trip unchanged. Every field is a string and may be absent; numeric
/// values ("8.5", "1,234,567") stay in their string form and are parsed
/// leniently on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Rated", default)]
    pub rated: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    /// Upstream fields we don't interpret (Director, Actors, ...), preserved
    /// across load/save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Release year as a number. The field must be entirely numeric
    /// ("2020-2021" and "N/A" are not); anything else yields 0.
    pub fn year_number(&self) -> i32 {
        if !self.year.is_empty() && self.year.bytes().all(|b| b.is_ascii_digit()) {
            self.year.parse().unwrap_or(0)
        } else {
            0
        }
    }

    /// IMDB rating as a float, if it parses.
    pub fn rating_value(&self) -> Option<f64> {
        self.imdb_rating.parse().ok()
    }

    /// Vote count with thousands separators stripped, if it parses.
    pub fn vote_count(&self) -> Option<i64> {
        self.imdb_votes.replace(',', "").parse().ok()
    }

    /// Whether the record carries a usable rating (present and not "N/A").
    pub fn has_rating(&self) -> bool {
        !self.imdb_rating.is_empty() && self.imdb_rating != "N/A"
    }

    /// First genre in the comma-separated genre list, if any.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genre
            .split(',')
            .map(str::trim)
            .find(|g| !g.is_empty())
    }
}
