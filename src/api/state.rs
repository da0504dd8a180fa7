use std::sync::Arc;

use crate::config::Config;
use crate::store::MovieStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    /// Maximum recommendations per suggestion request
    pub suggestion_limit: usize,
    /// Cap on how many candidates are scored per request
    pub max_candidates: usize,
}

impl AppState {
    /// Creates application state around a movie store
    pub fn new(store: Arc<dyn MovieStore>, config: &Config) -> Self {
        Self {
            store,
            suggestion_limit: config.suggestion_limit,
            max_candidates: config.max_candidates,
        }
    }
}
