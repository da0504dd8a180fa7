use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ChatTurn, Movie, PreferenceSet, Recommendation};
use crate::services::{preferences, response, selector};
use crate::store::views;

use super::AppState;

const NO_MATCHES_MESSAGE: &str = "I'm sorry, I couldn't find any movies matching your specific \
    criteria. Could you try asking for a different genre or being more specific about what \
    you're looking for?";

const EMPTY_CATALOG_MESSAGE: &str = "Sorry, no movies found in the database.";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    /// Optional title search
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub user_message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub ai_response: String,
    pub recommendations: Vec<Recommendation>,
    pub preferences_detected: PreferenceSet,
}

impl SuggestionResponse {
    fn without_matches(message: &str, preferences: PreferenceSet) -> Self {
        Self {
            ai_response: message.to_string(),
            recommendations: Vec::new(),
            preferences_detected: preferences,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the deduplicated catalog, optionally filtered by title search
pub async fn get_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.store.load().await?;
    let unique = views::unique_movies(&movies);

    let result = match params.q.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => views::search(&unique, query),
        _ => unique,
    };
    Ok(Json(result))
}

/// Appends a user-submitted movie to the catalog
pub async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title is required".to_string()));
    }

    let movie = state
        .store
        .add(&request.title, &request.description)
        .await?;

    tracing::info!(imdb_id = %movie.imdb_id, "Movie added to catalog");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Top-rated family-friendly movies grouped by primary genre
pub async fn top_by_genre(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<Movie>>>> {
    let movies = state.store.load().await?;
    let family = views::family_friendly(&movies);
    Ok(Json(views::top_by_genre(&family)))
}

/// Handler for the AI movie suggestions endpoint
pub async fn suggest_movies(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        message_len = request.user_message.len(),
        history_len = request.conversation_history.len(),
        "Processing movie suggestion request"
    );

    let movies = state.store.load().await?;
    let candidates = views::unique_movies(&movies);
    if candidates.is_empty() {
        tracing::warn!(request_id = %request_id, "Movie catalog is empty");
        return Ok(Json(SuggestionResponse::without_matches(
            EMPTY_CATALOG_MESSAGE,
            PreferenceSet::default(),
        )));
    }

    let detected =
        preferences::extract_preferences(&request.user_message, &request.conversation_history);

    let capped = &candidates[..candidates.len().min(state.max_candidates)];
    let recommendations = selector::score_and_select(&detected, capped, state.suggestion_limit);

    tracing::info!(
        request_id = %request_id,
        candidate_count = capped.len(),
        recommendation_count = recommendations.len(),
        "Movie suggestion request completed"
    );

    if recommendations.is_empty() {
        return Ok(Json(SuggestionResponse::without_matches(
            NO_MATCHES_MESSAGE,
            detected,
        )));
    }

    let ai_response = response::compose_response(
        &request.user_message,
        &recommendations,
        &detected,
        &mut rand::thread_rng(),
    );

    Ok(Json(SuggestionResponse {
        ai_response,
        recommendations,
        preferences_detected: detected,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MockMovieStore;

    fn state_with(store: MockMovieStore) -> AppState {
        AppState {
            store: Arc::new(store),
            suggestion_limit: 5,
            max_candidates: 1000,
        }
    }

    #[tokio::test]
    async fn test_suggest_surfaces_store_failure() {
        let mut store = MockMovieStore::new();
        store
            .expect_load()
            .returning(|| Err(AppError::Internal("disk gone".to_string())));

        let request = SuggestionRequest {
            user_message: "something funny".to_string(),
            conversation_history: Vec::new(),
        };
        let result = suggest_movies(State(state_with(store)), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_suggest_empty_catalog_is_a_soft_failure() {
        let mut store = MockMovieStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));

        let request = SuggestionRequest {
            user_message: "something funny".to_string(),
            conversation_history: Vec::new(),
        };
        let Json(body) = suggest_movies(State(state_with(store)), Json(request))
            .await
            .unwrap();
        assert_eq!(body.ai_response, EMPTY_CATALOG_MESSAGE);
        assert!(body.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_create_movie_rejects_blank_title() {
        let request = CreateMovieRequest {
            title: "   ".to_string(),
            description: String::new(),
        };
        let result = create_movie(State(state_with(MockMovieStore::new())), Json(request)).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
