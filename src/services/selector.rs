//! Ranking, cutoff, and backfill of scored candidates.

use std::cmp::Ordering;

use crate::models::{Movie, PreferenceSet, Recommendation};

use super::scoring;

/// Candidates must score strictly above this to qualify. The quality and
/// popularity bonuses alone top out at 15, so a movie has to match at least
/// one actual preference to get in.
pub const MIN_MATCH_SCORE: u32 = 20;

/// Minimum rating for the backfill pool of highly-rated popular titles.
pub const BACKFILL_RATING_FLOOR: f64 = 7.5;

/// Fixed score assigned to backfilled entries.
pub const BACKFILL_SCORE: u32 = 50;

const BACKFILL_REASON: &str = "is highly rated and popular";

/// Scores every candidate against the preferences and returns up to `limit`
/// recommendations, best match first.
///
/// If fewer than `limit` candidates clear the cutoff, the remaining slots
/// are backfilled with highly-rated titles not already selected. An empty
/// result is a valid outcome, not an error.
pub fn score_and_select(
    preferences: &PreferenceSet,
    movies: &[Movie],
    limit: usize,
) -> Vec<Recommendation> {
    let mut scored: Vec<(&Movie, u32, String)> = Vec::new();
    for movie in movies {
        let (score, why) = scoring::score_movie(movie, preferences);
        if score > MIN_MATCH_SCORE {
            scored.push((movie, score, why));
        }
    }

    // Stable sort: candidates with equal scores keep their dataset order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut recommendations: Vec<Recommendation> = scored
        .iter()
        .take(limit)
        .map(|(movie, score, why)| Recommendation::from_scored(movie, *score, why))
        .collect();

    if recommendations.len() < limit {
        backfill(movies, limit, &mut recommendations);
    }

    recommendations
}

fn backfill(movies: &[Movie], limit: usize, recommendations: &mut Vec<Recommendation>) {
    let mut pool: Vec<(f64, &Movie)> = movies
        .iter()
        .filter_map(|movie| movie.rating_value().map(|rating| (rating, movie)))
        .filter(|(rating, _)| *rating >= BACKFILL_RATING_FLOOR)
        .collect();
    pool.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    for (_, movie) in pool {
        if recommendations.len() >= limit {
            break;
        }
        if recommendations.iter().any(|r| r.imdb_id == movie.imdb_id) {
            continue;
        }
        recommendations.push(Recommendation::from_scored(movie, BACKFILL_SCORE, BACKFILL_REASON));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, genre: &str, year: &str, rating: &str) -> Movie {
        Movie {
            imdb_id: id.to_string(),
            title: title.to_string(),
            genre: genre.to_string(),
            year: year.to_string(),
            imdb_rating: rating.to_string(),
            poster: "poster.jpg".to_string(),
            ..Movie::default()
        }
    }

    fn action_prefs() -> PreferenceSet {
        PreferenceSet {
            genres: vec!["action".to_string()],
            ..PreferenceSet::default()
        }
    }

    #[test]
    fn test_empty_candidates_give_empty_result() {
        let recs = score_and_select(&action_prefs(), &[], 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_ranked_highest_score_first() {
        let movies = vec![
            movie("tt1", "Decent Action", "Action", "1975", "7.0"),
            movie("tt2", "Great Action", "Action", "1975", "8.5"),
        ];
        let recs = score_and_select(&action_prefs(), &movies, 5);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].imdb_id, "tt2");
        assert_eq!(recs[0].match_score, 30);
        assert_eq!(recs[1].match_score, 25);
    }

    #[test]
    fn test_exact_threshold_is_excluded() {
        // A bare genre match is exactly 20 points, which does not pass the
        // strictly-greater cutoff, and a 6.0 rating stays out of the
        // backfill pool.
        let movies = vec![movie("tt1", "Plain Action", "Action", "1975", "6.0")];
        assert!(score_and_select(&action_prefs(), &movies, 5).is_empty());
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let movies = vec![
            movie("tt1", "First", "Action", "1975", "7.0"),
            movie("tt2", "Second", "Action", "1975", "7.0"),
            movie("tt3", "Third", "Action", "1975", "7.0"),
        ];
        let recs = score_and_select(&action_prefs(), &movies, 5);
        let ids: Vec<&str> = recs.iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2", "tt3"]);
    }

    #[test]
    fn test_bonus_only_movies_excluded_without_backfill_pool() {
        // A strong rating with no tag match is bonus points only, below the
        // cutoff, and 7.4 keeps it out of the backfill pool too.
        let movies = vec![movie("tt1", "Well Liked Romance", "Romance", "1975", "7.4")];
        let recs = score_and_select(&action_prefs(), &movies, 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_backfill_fills_remaining_slots() {
        let movies = vec![
            movie("tt1", "The Only Action", "Action", "1995", "8.5"),
            movie("tt2", "Acclaimed Drama", "Drama", "1994", "8.9"),
            movie("tt3", "Solid Drama", "Drama", "2001", "7.6"),
            movie("tt4", "Middling Drama", "Drama", "2002", "6.5"),
        ];
        let recs = score_and_select(&action_prefs(), &movies, 3);
        assert_eq!(recs.len(), 3);

        // Primary match first, then backfill by rating descending.
        assert_eq!(recs[0].imdb_id, "tt1");
        assert_eq!(recs[1].imdb_id, "tt2");
        assert_eq!(recs[2].imdb_id, "tt3");

        assert_eq!(recs[1].match_score, BACKFILL_SCORE);
        assert_eq!(recs[1].why_recommended, "is highly rated and popular");
        assert_eq!(recs[2].match_score, BACKFILL_SCORE);
    }

    #[test]
    fn test_backfill_never_duplicates_selected_ids() {
        // tt1 qualifies on its own and also sits in the backfill pool.
        let movies = vec![
            movie("tt1", "The Only Action", "Action", "1995", "8.5"),
            movie("tt2", "Acclaimed Drama", "Drama", "1994", "8.9"),
        ];
        let recs = score_and_select(&action_prefs(), &movies, 5);
        let mut ids: Vec<&str> = recs.iter().map(|r| r.imdb_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recs.len());
    }

    #[test]
    fn test_limit_respected() {
        let movies: Vec<Movie> = (0..10)
            .map(|i| movie(&format!("tt{i}"), &format!("Action {i}"), "Action", "1995", "8.0"))
            .collect();
        let recs = score_and_select(&action_prefs(), &movies, 5);
        assert_eq!(recs.len(), 5);
    }
}
