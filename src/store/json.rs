use std::path::PathBuf;

use serde_json::Value;

use crate::error::AppResult;
use crate::models::Movie;

use super::MovieStore;

/// Movie store backed by a single JSON array file.
///
/// Writes keep a `*_backup.json` copy of the previous contents and then
/// rewrite the whole file. There is no locking and no atomic rename:
/// concurrent writers race and the last write wins.
pub struct JsonMovieStore {
    path: PathBuf,
}

impl JsonMovieStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn backup_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("movies");
        self.path.with_file_name(format!("{stem}_backup.json"))
    }

    async fn read_records(&self) -> AppResult<Vec<Movie>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let values: Vec<Value> = serde_json::from_str(&raw)?;

        let mut movies = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<Movie>(value) {
                Ok(movie) => movies.push(movie),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed movie record");
                }
            }
        }
        Ok(movies)
    }

    async fn write_records(&self, movies: &[Movie]) -> AppResult<()> {
        if tokio::fs::try_exists(&self.path).await? {
            tokio::fs::copy(&self.path, self.backup_path()).await?;
        }
        let serialized = serde_json::to_string_pretty(movies)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }

    /// Allocates the next `tt`-style identifier: one past the highest
    /// numeric id already in the catalog, zero-padded to seven digits.
    fn next_imdb_id(movies: &[Movie]) -> String {
        let max = movies
            .iter()
            .filter_map(|m| m.imdb_id.replace("tt", "").parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("tt{:07}", max + 1)
    }
}

#[async_trait::async_trait]
impl MovieStore for JsonMovieStore {
    async fn load(&self) -> AppResult<Vec<Movie>> {
        self.read_records().await
    }

    async fn add(&self, title: &str, description: &str) -> AppResult<Movie> {
        let mut movies = self.read_records().await?;

        let mut movie = Movie {
            imdb_id: Self::next_imdb_id(&movies),
            title: title.to_string(),
            imdb_rating: "N/A".to_string(),
            ..Movie::default()
        };
        movie
            .extra
            .insert("description".to_string(), Value::String(description.to_string()));

        movies.push(movie.clone());
        self.write_records(&movies).await?;
        Ok(movie)
    }
}
