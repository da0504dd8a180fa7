use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON movie catalog file
    #[serde(default = "default_movies_file")]
    pub movies_file: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of recommendations returned per suggestion request
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Cap on the number of candidates scored per suggestion request
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

fn default_movies_file() -> String {
    "data/movies.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_max_candidates() -> usize {
    1000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
