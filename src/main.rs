use std::sync::Arc;

use moviehub_api::api::{create_router, AppState};
use moviehub_api::config::Config;
use moviehub_api::store::JsonMovieStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("moviehub_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(JsonMovieStore::new(&config.movies_file));
    let state = AppState::new(store, &config);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, movies_file = %config.movies_file, "Movie catalog server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
