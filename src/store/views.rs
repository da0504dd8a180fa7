//! Pure projections over the raw catalog.
//!
//! The catalog file accumulates merged imports, so titles repeat and many
//! records lack posters or ratings. Every read path goes through
//! [`unique_movies`] (or the family-friendly variant) first.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::models::Movie;

/// Content ratings considered safe for the family-friendly views.
pub const FAMILY_RATINGS: &[&str] = &["G", "PG", "PG-13"];

/// How many movies each genre keeps in the top-by-genre view.
pub const TOP_PER_GENRE: usize = 5;

fn presentable(movie: &Movie) -> bool {
    !movie.title.is_empty() && !movie.poster.is_empty() && movie.has_rating()
}

/// Deduplicates the catalog by title, keeping the first occurrence of each.
/// Records without a title, poster, or usable rating are dropped.
pub fn unique_movies(movies: &[Movie]) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for movie in movies {
        if presentable(movie) && seen.insert(movie.title.clone()) {
            unique.push(movie.clone());
        }
    }
    unique
}

/// [`unique_movies`] restricted to family-friendly content ratings.
pub fn family_friendly(movies: &[Movie]) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for movie in movies {
        if presentable(movie)
            && FAMILY_RATINGS.contains(&movie.rated.as_str())
            && seen.insert(movie.title.clone())
        {
            unique.push(movie.clone());
        }
    }
    unique
}

/// Groups movies by their first listed genre and keeps the top
/// [`TOP_PER_GENRE`] by rating. Genres with fewer entries than that are
/// omitted entirely so the view never shows a half-empty shelf.
pub fn top_by_genre(movies: &[Movie]) -> BTreeMap<String, Vec<Movie>> {
    let mut by_genre: BTreeMap<String, Vec<(f64, Movie)>> = BTreeMap::new();
    for movie in movies {
        if let (Some(genre), Some(rating)) = (movie.primary_genre(), movie.rating_value()) {
            by_genre
                .entry(genre.to_string())
                .or_default()
                .push((rating, movie.clone()));
        }
    }

    let mut top = BTreeMap::new();
    for (genre, mut group) in by_genre {
        group.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        if group.len() >= TOP_PER_GENRE {
            let movies = group
                .into_iter()
                .take(TOP_PER_GENRE)
                .map(|(_, m)| m)
                .collect();
            top.insert(genre, movies);
        }
    }
    top
}

/// Case-insensitive title-substring search.
pub fn search(movies: &[Movie], query: &str) -> Vec<Movie> {
    let query = query.trim().to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
