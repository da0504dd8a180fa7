mod json;
pub mod views;

use crate::error::AppResult;
use crate::models::Movie;

pub use json::JsonMovieStore;

/// Persistence seam for the movie catalog.
///
/// The catalog lives in a single flat file that is read and rewritten
/// wholesale, so implementations expose coarse whole-collection operations
/// rather than per-record ones. A store backed by a real database would slot
/// in behind this trait without touching the handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns every record in the catalog.
    async fn load(&self) -> AppResult<Vec<Movie>>;

    /// Appends a user-submitted movie and persists the catalog.
    /// Returns the stored record with its newly allocated identifier.
    async fn add(&self, title: &str, description: &str) -> AppResult<Movie>;
}
